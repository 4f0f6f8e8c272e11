//! Derived values that gate and decorate dashboard form controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each function maps current input values to a property the host writes back
//! (a `disabled` flag, a class list, an href). None of them hold state.

pub mod archetype;
pub mod export;
pub mod feedback;
pub mod forms;
pub mod toggle;
pub mod tour_filter;
