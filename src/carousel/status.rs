//! Per-item status: does the observed count agree with the reference records?
//!
//! DESIGN
//! ======
//! Reference records arrive as raw JSON from the host and may key cards by
//! different fields depending on where they came from, so the key field is
//! configuration (`StatusMatcher`). Matching is recomputed from scratch on
//! every call because the records can change between events.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{MATCHED_ICON, REFERENCE_KEY_FIELD, UNMATCHED_ICON};

/// Outcome of comparing an observed count against the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// No count has been entered yet.
    Unknown,
    Matched,
    Unmatched,
}

impl MatchStatus {
    /// Icon classes rendered next to the count input. Empty for `Unknown`.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Matched => MATCHED_ICON,
            Self::Unmatched => UNMATCHED_ICON,
        }
    }
}

/// One reference record: a key and how many copies it accounts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub key: String,
    #[serde(default = "default_expected_count")]
    pub expected_count: u32,
}

fn default_expected_count() -> u32 {
    1
}

impl ReferenceEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, expected_count: u32) -> Self {
        Self { key: key.into(), expected_count }
    }
}

/// Compare `observed` against the entries keyed `active`.
///
/// The expected count is the sum over matching entries, so a list holding one
/// record per physical copy and a list holding one record with a count agree.
/// No matching entry is always `Unmatched`.
#[must_use]
pub fn match_status(active: &str, observed: Option<u32>, entries: &[ReferenceEntry]) -> MatchStatus {
    let Some(observed) = observed else {
        return MatchStatus::Unknown;
    };
    let mut matching = entries.iter().filter(|e| e.key == active).peekable();
    if matching.peek().is_none() {
        return MatchStatus::Unmatched;
    }
    let expected: u64 = matching.map(|e| u64::from(e.expected_count)).sum();
    if u64::from(observed) == expected {
        MatchStatus::Matched
    } else {
        MatchStatus::Unmatched
    }
}

/// Reads reference entries out of host JSON records by a configured key field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMatcher {
    key_field: String,
}

impl Default for StatusMatcher {
    fn default() -> Self {
        Self::new(REFERENCE_KEY_FIELD)
    }
}

impl StatusMatcher {
    #[must_use]
    pub fn new(key_field: impl Into<String>) -> Self {
        Self { key_field: key_field.into() }
    }

    #[must_use]
    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// Extract entries from `records`. Records without the key field are skipped.
    ///
    /// The count comes from `expected_count` / `expectedCount` when present,
    /// otherwise each record counts once.
    #[must_use]
    pub fn entries(&self, records: &[Value]) -> Vec<ReferenceEntry> {
        records
            .iter()
            .filter_map(|record| {
                let Some(key) = record.get(&self.key_field).and_then(key_text) else {
                    log::debug!("reference record has no `{}` field; skipping", self.key_field);
                    return None;
                };
                let expected_count = record
                    .get("expected_count")
                    .or_else(|| record.get("expectedCount"))
                    .and_then(Value::as_u64)
                    .map_or(1, |n| u32::try_from(n).unwrap_or(u32::MAX));
                Some(ReferenceEntry { key, expected_count })
            })
            .collect()
    }

    /// Status of `active` given the observed count and the raw reference records.
    #[must_use]
    pub fn status(&self, active: &str, observed: Option<u32>, records: &[Value]) -> MatchStatus {
        match_status(active, observed, &self.entries(records))
    }
}

fn key_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
