//! Widget configuration supplied by the host page as JSON.
//!
//! Every field has a default, so `{}` is a valid configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::carousel::StatusMatcher;
use crate::consts::{
    ACTIVE_CLASS, EXPORT_PREFIX, HIDDEN_CLASS, ITEM_SELECTOR, MAX_REBUILD_DELAY_MS, REBUILD_DELAY_MS,
    REFERENCE_KEY_FIELD,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{field}` must not be empty")]
    Empty { field: &'static str },
    #[error("rebuild_delay_ms {value} exceeds {max}")]
    DelayTooLong { value: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Delay before a reconfigured drag binding scans for containers.
    pub rebuild_delay_ms: u32,
    /// Class marking the active carousel item.
    pub active_class: String,
    /// Selector for carousel items.
    pub item_selector: String,
    /// Class applied by visibility toggles.
    pub hidden_class: String,
    /// Reference record field compared against the active item id.
    pub reference_key_field: String,
    /// File-name prefix for image exports.
    pub export_prefix: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            rebuild_delay_ms: REBUILD_DELAY_MS,
            active_class: ACTIVE_CLASS.to_owned(),
            item_selector: ITEM_SELECTOR.to_owned(),
            hidden_class: HIDDEN_CLASS.to_owned(),
            reference_key_field: REFERENCE_KEY_FIELD.to_owned(),
            export_prefix: EXPORT_PREFIX.to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `raw`, falling back to defaults (with a warning) when it is rejected.
    #[must_use]
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default widget config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rebuild_delay_ms > MAX_REBUILD_DELAY_MS {
            return Err(ConfigError::DelayTooLong { value: self.rebuild_delay_ms, max: MAX_REBUILD_DELAY_MS });
        }
        let fields = [
            ("active_class", &self.active_class),
            ("item_selector", &self.item_selector),
            ("hidden_class", &self.hidden_class),
            ("reference_key_field", &self.reference_key_field),
            ("export_prefix", &self.export_prefix),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        Ok(())
    }

    /// Status matcher keyed on the configured reference field.
    #[must_use]
    pub fn status_matcher(&self) -> StatusMatcher {
        StatusMatcher::new(self.reference_key_field.clone())
    }
}
