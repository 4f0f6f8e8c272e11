//! Key → handle resolution for drop containers.
//!
//! DESIGN
//! ======
//! The engine only ever consumes handles. Hosts decide what a handle is: a DOM
//! element in the browser adapter, the key itself for `MemoryRegistry`.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

use super::container::ContainerKey;
use crate::item::ItemId;

/// Resolves container keys to live handles and reads their current items.
pub trait ContainerRegistry {
    /// Whatever identifies a live container to the host.
    type Handle;

    /// Look up the live container for `key`; `None` when nothing is mounted.
    fn resolve(&self, key: &ContainerKey) -> Option<Self::Handle>;

    /// Current item order inside a resolved container.
    fn items(&self, handle: &Self::Handle) -> Vec<ItemId>;
}

/// Registry backed by a plain map, for hosts that keep their own container model.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    containers: HashMap<ContainerKey, Vec<ItemId>>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount (or replace) a container with the given item order.
    pub fn mount(&mut self, key: impl Into<ContainerKey>, items: impl IntoIterator<Item = impl Into<ItemId>>) {
        self.containers
            .insert(key.into(), items.into_iter().map(Into::into).collect());
    }

    /// Unmount a container. Returns its items if it was mounted.
    pub fn unmount(&mut self, key: &ContainerKey) -> Option<Vec<ItemId>> {
        self.containers.remove(key)
    }

    #[must_use]
    pub fn is_mounted(&self, key: &ContainerKey) -> bool {
        self.containers.contains_key(key)
    }
}

impl ContainerRegistry for MemoryRegistry {
    type Handle = ContainerKey;

    fn resolve(&self, key: &ContainerKey) -> Option<ContainerKey> {
        self.containers.contains_key(key).then(|| key.clone())
    }

    fn items(&self, handle: &ContainerKey) -> Vec<ItemId> {
        self.containers.get(handle).cloned().unwrap_or_default()
    }
}
