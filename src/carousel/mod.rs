//! Wheel-driven card carousel.
//!
//! The host owns the `CarouselState` and the reference records and passes both
//! back in on every event; nothing here caches between calls except what the
//! host hands back.

pub mod navigator;
pub mod selection;
pub mod status;

pub use navigator::{CarouselState, Direction, step};
pub use selection::{ItemSurface, set_active_visual};
pub use status::{MatchStatus, ReferenceEntry, StatusMatcher, match_status};
