//! Small gating helpers for the import, battle log, and download controls.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::consts::HIDDEN_CLASS;

/// Spacing class on each visible game row of the battle log.
const GAME_ROW_CLASS: &str = "mt-1";

/// Import stays disabled until something has been pasted.
#[must_use]
pub fn import_disabled(text: &str) -> bool {
    text.is_empty()
}

/// Download stays disabled while there is nothing to download.
#[must_use]
pub fn download_disabled(rows: usize) -> bool {
    rows == 0
}

/// Row classes for a best-of-one (`"1"`) or best-of-three match.
#[must_use]
pub fn best_of_classes(games: &str) -> [&'static str; 3] {
    if games == "1" {
        [GAME_ROW_CLASS, HIDDEN_CLASS, HIDDEN_CLASS]
    } else {
        [GAME_ROW_CLASS; 3]
    }
}

/// Battle log submit needs the deck played, the opponent, and the result.
#[must_use]
pub fn battle_submit_disabled(playing: Option<&str>, against: Option<&str>, result: Option<&str>) -> bool {
    playing.is_none() || against.is_none() || result.is_none()
}
