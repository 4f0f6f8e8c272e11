//! Shared defaults for the widget crate.

// ── Reorder ─────────────────────────────────────────────────────

/// Delay before a reconfigured drag binding scans for containers, in ms.
///
/// One tick is enough for the host to finish mounting new containers.
pub const REBUILD_DELAY_MS: u32 = 1;

/// Upper bound accepted for a configured rebuild delay, in ms.
pub const MAX_REBUILD_DELAY_MS: u32 = 1_000;

/// Bubbling DOM event dispatched on the target container after a drop.
pub const DROP_COMPLETE_EVENT: &str = "dropcomplete";

// ── Carousel ────────────────────────────────────────────────────

/// Class marking the active carousel item.
pub const ACTIVE_CLASS: &str = "target";

/// Selector for carousel items in the DOM.
pub const ITEM_SELECTOR: &str = ".card-in-stack";

/// Reference record field compared against the active item id.
pub const REFERENCE_KEY_FIELD: &str = "card_code";

/// Icon classes rendered for a matched status.
pub const MATCHED_ICON: &str = "fas fa-check text-success";

/// Icon classes rendered for an unmatched status.
pub const UNMATCHED_ICON: &str = "fas fa-xmark text-danger";

// ── Controls ────────────────────────────────────────────────────

/// Class that hides an element.
pub const HIDDEN_CLASS: &str = "d-none";

/// Class that stretches an element to full width.
pub const FULL_WIDTH_CLASS: &str = "w-100";

/// File-name prefix for exported images.
pub const EXPORT_PREFIX: &str = "trainerhill";

/// Export background for the dark theme.
pub const DARK_EXPORT_BACKGROUND: &str = "#222222";

/// Export background for the light theme.
pub const LIGHT_EXPORT_BACKGROUND: &str = "#ffffff";

/// Feedback messages must be longer than this many characters.
pub const FEEDBACK_MIN_MESSAGE_CHARS: usize = 10;
