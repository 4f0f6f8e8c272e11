//! Collapse and visibility toggles.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::consts::FULL_WIDTH_CLASS;

/// Flip `is_open` once the button has been clicked at least once.
#[must_use]
pub fn toggle_with_button(clicks: u32, is_open: bool) -> bool {
    if clicks > 0 { !is_open } else { is_open }
}

/// One class per item: visible (`""`) or `hidden_class`.
#[must_use]
pub fn visibility_classes(show: bool, count: usize, hidden_class: &str) -> Vec<&str> {
    vec![if show { "" } else { hidden_class }; count]
}

/// Classes for the tier list column and the meta-share column beside it.
///
/// Hiding meta share stretches the tier list to full width.
#[must_use]
pub fn meta_share_classes(show: bool, hidden_class: &str) -> [&str; 2] {
    if show { ["", ""] } else { [FULL_WIDTH_CLASS, hidden_class] }
}
