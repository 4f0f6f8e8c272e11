//! Multi-container drag-and-drop reordering.
//!
//! ARCHITECTURE
//! ============
//! The host declares which containers exist (`ReorderEngine::configure`), a
//! registry maps each key to a live handle one tick later
//! (`ReorderEngine::rebuild`), and completed drop gestures come back in as
//! `ReorderEngine::on_drop`. The engine never looks up DOM nodes itself; the
//! `ContainerRegistry` implementation does. `SharedReorder` is the handle
//! browser callbacks share.

pub mod container;
pub mod engine;
pub mod registry;
pub mod shared;

pub use container::{Container, ContainerKey, KeyError, PatternId};
pub use engine::{DragBinding, DropError, DropTarget, MoveEvent, RebuildTicket, ReorderEngine};
pub use registry::{ContainerRegistry, MemoryRegistry};
pub use shared::{BusyError, SharedReorder};
