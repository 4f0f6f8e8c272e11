//! Naming and styling of DOM-node image exports.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::consts::{DARK_EXPORT_BACKGROUND, LIGHT_EXPORT_BACKGROUND};

/// What the rasterizer should produce for one export click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Id of the DOM node to capture.
    pub node_id: String,
    /// `{prefix}-{node_id}-{YYYY-MM-DD}.png`
    pub file_name: String,
    /// Canvas background matching the active theme.
    pub background: &'static str,
}

/// Build the export for a click on the download button; `None` before any click.
///
/// `today` may be a full ISO-8601 timestamp; only the date part is used.
#[must_use]
pub fn export_request(clicks: u32, prefix: &str, node_id: &str, today: &str, dark: bool) -> Option<ExportRequest> {
    if clicks == 0 {
        return None;
    }
    let date = today.get(..10).unwrap_or(today);
    Some(ExportRequest {
        node_id: node_id.to_owned(),
        file_name: format!("{prefix}-{node_id}-{date}.png"),
        background: if dark { DARK_EXPORT_BACKGROUND } else { LIGHT_EXPORT_BACKGROUND },
    })
}
