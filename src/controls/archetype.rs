//! Custom archetype builder: id slugs and add-button gating.

#[cfg(test)]
#[path = "archetype_test.rs"]
mod archetype_test;

use serde::{Deserialize, Serialize};

/// A user-defined archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeDeck {
    pub id: String,
    pub name: String,
    pub icons: Vec<String>,
}

/// Whether the add button is usable, with the reason shown when it is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddCheck {
    Ready,
    Disabled(&'static str),
}

impl AddCheck {
    #[must_use]
    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled(_))
    }

    /// Hint text for the form; empty when ready.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Ready => "",
            Self::Disabled(reason) => reason,
        }
    }
}

/// Slug a display name into an id: drop everything but ASCII word characters
/// and whitespace, turn each whitespace run into `-`, lowercase.
///
/// Leading and trailing runs are kept, so ids stay comparable with ones the
/// server derived from the same names.
#[must_use]
pub fn clean_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_run {
                id.push('-');
            }
            in_run = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            id.push(c.to_ascii_lowercase());
            in_run = false;
        }
    }
    id
}

/// Gate the add button on selected icons and a fresh, non-empty name.
///
/// `extra` holds ids reserved by built-in archetypes.
#[must_use]
pub fn add_check(icons: &[String], name: &str, current: &[ArchetypeDeck], extra: &[String]) -> AddCheck {
    let id = clean_id(name);
    let taken = current.iter().any(|deck| deck.id == id) || extra.contains(&id);
    if name.is_empty() {
        return AddCheck::Disabled(if icons.is_empty() {
            "Please select icons and input name."
        } else {
            "Please input name."
        });
    }
    if icons.is_empty() {
        return AddCheck::Disabled("Please select icons.");
    }
    if taken {
        return AddCheck::Disabled("Name already exists, please try a different name.");
    }
    AddCheck::Ready
}

/// Append a new archetype built from the form. `None` until the button is clicked.
#[must_use]
pub fn add_deck(clicks: u32, icons: &[String], name: &str, current: &[ArchetypeDeck]) -> Option<Vec<ArchetypeDeck>> {
    if clicks == 0 {
        return None;
    }
    let mut decks = current.to_vec();
    decks.push(ArchetypeDeck { id: clean_id(name), name: name.to_owned(), icons: icons.to_vec() });
    Some(decks)
}

/// A tag can be added only when non-empty and not already present.
#[must_use]
pub fn tag_add_disabled(value: &str, current: &[String], others: &[String]) -> bool {
    value.is_empty() || current.iter().any(|v| v == value) || others.iter().any(|v| v == value)
}
