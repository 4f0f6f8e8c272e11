//! Interactive widget logic for the dashboard front end.
//!
//! This crate is compiled to WebAssembly alongside the dashboard pages. It owns
//! the state machines behind the drag-and-drop tier builder and the card
//! carousel, plus the small derived-value helpers that gate form controls. The
//! host page renders markup and wires DOM events in; everything here returns
//! plain values (or [`reorder::MoveEvent`]s) for the host to re-render from.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`reorder`] | Container registry, drag binding lifecycle, drop handling |
//! | [`carousel`] | Bounded index stepping, active-item marking, status matching |
//! | [`controls`] | Derived booleans, visibility classes, filter hrefs, export names |
//! | [`config`] | Host-supplied widget configuration |
//! | [`item`] | Opaque item identifiers shared by both widgets |
//! | [`consts`] | Shared defaults (class names, delays, event names) |
//! | `dom` | Browser adapters (`hydrate` feature only) |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod controls;
pub mod item;
pub mod reorder;

#[cfg(feature = "hydrate")]
pub mod dom;
