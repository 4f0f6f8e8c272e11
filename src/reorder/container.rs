//! Container keys and the ordered item sequences they index.

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// Stable key identifying one drop container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerKey(pub String);

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("container descriptor is not serializable: {0}")]
    Descriptor(#[from] serde_json::Error),
}

impl ContainerKey {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Derive a key from a serializable descriptor: the key is its JSON text.
    pub fn from_descriptor<T: Serialize + ?Sized>(descriptor: &T) -> Result<Self, KeyError> {
        Ok(Self(serde_json::to_string(descriptor)?))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for ContainerKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Pattern-matching component id of the form `{"index": ..., "type": ...}`.
///
/// Fields are declared in sorted order so the encoded key matches the id the
/// page framework stamps on the element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternId {
    pub index: serde_json::Value,
    #[serde(rename = "type")]
    pub kind: String,
}

impl PatternId {
    #[must_use]
    pub fn new(kind: impl Into<String>, index: impl Into<serde_json::Value>) -> Self {
        Self { index: index.into(), kind: kind.into() }
    }

    pub fn key(&self) -> Result<ContainerKey, KeyError> {
        ContainerKey::from_descriptor(self)
    }
}

/// A container's key and its current item order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    key: ContainerKey,
    items: Vec<ItemId>,
}

impl Container {
    #[must_use]
    pub fn new(key: ContainerKey, items: Vec<ItemId>) -> Self {
        Self { key, items }
    }

    #[must_use]
    pub fn key(&self) -> &ContainerKey {
        &self.key
    }

    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of `item` in this container, if present.
    #[must_use]
    pub fn position(&self, item: &ItemId) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    pub(crate) fn replace_items(&mut self, items: Vec<ItemId>) {
        self.items = items;
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> ItemId {
        self.items.remove(index)
    }

    /// Insert at `index`, appending when `index` is past the end.
    pub(crate) fn insert_at(&mut self, index: usize, item: ItemId) -> usize {
        let at = index.min(self.items.len());
        self.items.insert(at, item);
        at
    }
}
