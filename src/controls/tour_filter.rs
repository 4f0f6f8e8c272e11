//! Tournament filter form: apply-button gating and the href it navigates to.

#[cfg(test)]
#[path = "tour_filter_test.rs"]
mod tour_filter_test;

use serde::{Deserialize, Serialize};
use urlencoding::encode;

/// Values of the tournament filter form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourFilter {
    pub game: String,
    pub players: u32,
    pub start_date: String,
    pub end_date: Option<String>,
    pub platform: Option<String>,
}

impl TourFilter {
    /// Apply stays disabled until some field differs from the page's initial filter.
    #[must_use]
    pub fn apply_disabled(&self, initial: &TourFilter) -> bool {
        self == initial
    }

    /// Query string (plus fragment) for applying this filter.
    ///
    /// `end_date` and `platform` are only included when set. Values are
    /// percent-encoded; `hash` is appended as given.
    #[must_use]
    pub fn apply_href(&self, hash: &str) -> String {
        let mut href = format!(
            "?game={}&players={}&start_date={}",
            encode(&self.game),
            self.players,
            encode(&self.start_date)
        );
        if let Some(end) = &self.end_date {
            href.push_str(&format!("&end_date={}", encode(end)));
        }
        if let Some(platform) = &self.platform {
            href.push_str(&format!("&platform={}", encode(platform)));
        }
        href.push('#');
        href.push_str(hash);
        href
    }
}
