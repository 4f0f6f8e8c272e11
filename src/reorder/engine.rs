//! Drag binding lifecycle and drop handling.
//!
//! A `ReorderEngine` moves through two phases per configuration:
//!
//! 1. **Configure**: the previous `DragBinding` is dropped immediately and a
//!    `RebuildTicket` for the new key list is handed back to the host.
//! 2. **Rebuild**: one tick later the host redeems the ticket against a
//!    `ContainerRegistry`. Only the newest ticket is honored, so a configure
//!    that lands before the previous rebuild ran wins outright.
//!
//! Drops are only accepted while a binding is live. Each drop that changes
//! order produces exactly one `MoveEvent`, delivered to every listener before
//! `on_drop` returns.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use super::container::{Container, ContainerKey};
use super::registry::ContainerRegistry;
use crate::item::ItemId;

/// Record of one completed reordering or transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEvent {
    pub item_id: ItemId,
    pub source_container_key: ContainerKey,
    pub target_container_key: ContainerKey,
    /// Index of the item in the target container after the move.
    pub target_position: usize,
}

/// Why a drop was discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("no drag binding is live")]
    NotBound,
    #[error("container not bound: {0}")]
    UnknownContainer(ContainerKey),
    #[error("item {item} is not in container {container}")]
    ItemNotInSource { item: ItemId, container: ContainerKey },
    #[error("sibling {sibling} is not in container {container}")]
    SiblingNotInTarget { sibling: ItemId, container: ContainerKey },
}

/// Claim on a deferred rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildTicket {
    generation: u64,
}

impl RebuildTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// A resolved container: the host's handle plus the tracked item order.
#[derive(Debug, Clone)]
pub struct DropTarget<H> {
    pub handle: H,
    pub container: Container,
}

/// One generation of live drop targets. Every rebuild creates a fresh one.
#[derive(Debug)]
pub struct DragBinding<H> {
    generation: u64,
    targets: Vec<DropTarget<H>>,
}

impl<H> DragBinding<H> {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn targets(&self) -> &[DropTarget<H>] {
        &self.targets
    }

    #[must_use]
    pub fn target(&self, key: &ContainerKey) -> Option<&DropTarget<H>> {
        self.targets.iter().find(|t| t.container.key() == key)
    }

    /// Keys of the bound containers, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &ContainerKey> {
        self.targets.iter().map(|t| t.container.key())
    }

    fn index_of(&self, key: &ContainerKey) -> Option<usize> {
        self.targets.iter().position(|t| t.container.key() == key)
    }

    /// Move `item` from `source` to `target`, before `sibling` or at the end.
    ///
    /// Returns `Ok(None)` when the drop leaves the order unchanged. Nothing is
    /// mutated unless the whole drop resolves.
    fn move_item(
        &mut self,
        item: &ItemId,
        source: &ContainerKey,
        target: &ContainerKey,
        sibling: Option<&ItemId>,
    ) -> Result<Option<MoveEvent>, DropError> {
        let src = self
            .index_of(source)
            .ok_or_else(|| DropError::UnknownContainer(source.clone()))?;
        let dst = self
            .index_of(target)
            .ok_or_else(|| DropError::UnknownContainer(target.clone()))?;
        let origin = self.targets[src]
            .container
            .position(item)
            .ok_or_else(|| DropError::ItemNotInSource { item: item.clone(), container: source.clone() })?;

        if sibling == Some(item) {
            return Ok(None);
        }

        // Positions are computed against the target as it looks once the item
        // has left its origin.
        let position = match sibling {
            Some(sibling) => {
                let at = self.targets[dst].container.position(sibling).ok_or_else(|| {
                    DropError::SiblingNotInTarget { sibling: sibling.clone(), container: target.clone() }
                })?;
                if src == dst && origin < at { at - 1 } else { at }
            }
            None => {
                let len = self.targets[dst].container.len();
                if src == dst { len - 1 } else { len }
            }
        };

        if src == dst && position == origin {
            return Ok(None);
        }

        let moved = self.targets[src].container.remove_at(origin);
        let target_position = self.targets[dst].container.insert_at(position, moved);

        Ok(Some(MoveEvent {
            item_id: item.clone(),
            source_container_key: source.clone(),
            target_container_key: target.clone(),
            target_position,
        }))
    }
}

pub(crate) type Listener = Box<dyn FnMut(&MoveEvent)>;

/// Tracks the declared containers and turns completed drops into `MoveEvent`s.
pub struct ReorderEngine<H> {
    generation: u64,
    pending: Option<Vec<ContainerKey>>,
    binding: Option<DragBinding<H>>,
    listeners: Vec<Listener>,
}

impl<H> Default for ReorderEngine<H> {
    fn default() -> Self {
        Self { generation: 0, pending: None, binding: None, listeners: Vec::new() }
    }
}

impl<H> std::fmt::Debug for ReorderEngine<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReorderEngine")
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .field("bound", &self.binding.as_ref().map(|b| b.targets.len()))
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<H> ReorderEngine<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for completed moves. Listeners outlive reconfiguration.
    pub fn subscribe(&mut self, listener: impl FnMut(&MoveEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // --- Lifecycle ---

    /// Tear down the live binding and queue a rebuild for `keys`.
    ///
    /// Any ticket handed out earlier is invalidated.
    pub fn configure(&mut self, keys: impl IntoIterator<Item = ContainerKey>) -> RebuildTicket {
        if let Some(old) = self.binding.take() {
            log::debug!("tearing down drag binding generation {}", old.generation);
        }
        if self.pending.is_some() {
            log::debug!("superseding pending rebuild generation {}", self.generation);
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(keys.into_iter().collect());
        RebuildTicket { generation: self.generation }
    }

    /// Resolve the pending configuration and install a fresh binding.
    ///
    /// Returns `false` (and changes nothing) when `ticket` has been superseded
    /// or already redeemed. Keys the registry cannot resolve are skipped;
    /// repeated keys bind once.
    pub fn rebuild<R>(&mut self, ticket: RebuildTicket, registry: &R) -> bool
    where
        R: ContainerRegistry<Handle = H>,
    {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale rebuild generation {} (current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        let Some(keys) = self.pending.take() else {
            log::debug!("rebuild generation {} already applied", ticket.generation);
            return false;
        };

        let mut targets: Vec<DropTarget<H>> = Vec::with_capacity(keys.len());
        for key in keys {
            if targets.iter().any(|t| t.container.key() == &key) {
                continue;
            }
            let Some(handle) = registry.resolve(&key) else {
                log::debug!("container {key} has no live target; skipping");
                continue;
            };
            let items = registry.items(&handle);
            targets.push(DropTarget { handle, container: Container::new(key, items) });
        }

        log::info!("drag binding generation {} tracking {} containers", self.generation, targets.len());
        self.binding = Some(DragBinding { generation: self.generation, targets });
        true
    }

    /// Re-read the item order of every bound container through its handle.
    ///
    /// For hosts that re-render items inside containers that stay in place.
    /// Returns `false` when no binding is live.
    pub fn refresh<R>(&mut self, registry: &R) -> bool
    where
        R: ContainerRegistry<Handle = H>,
    {
        let Some(binding) = self.binding.as_mut() else {
            log::debug!("refresh skipped; no drag binding is live");
            return false;
        };
        for target in &mut binding.targets {
            target.container.replace_items(registry.items(&target.handle));
        }
        log::debug!("drag binding generation {} refreshed", binding.generation);
        true
    }

    /// Whether a configure is waiting for its rebuild.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn binding(&self) -> Option<&DragBinding<H>> {
        self.binding.as_ref()
    }

    /// Current order of a bound container.
    #[must_use]
    pub fn container(&self, key: &ContainerKey) -> Option<&Container> {
        self.binding.as_ref()?.target(key).map(|t| &t.container)
    }

    // --- Gestures ---

    /// Apply a completed drop gesture.
    ///
    /// Returns the emitted event, or `None` when the drop was a no-op or could
    /// not be resolved. Unresolvable drops are logged and otherwise ignored.
    pub fn on_drop(
        &mut self,
        item: &ItemId,
        source: &ContainerKey,
        target: &ContainerKey,
        sibling: Option<&ItemId>,
    ) -> Option<MoveEvent> {
        let outcome = match self.binding.as_mut() {
            Some(binding) => binding.move_item(item, source, target, sibling),
            None => Err(DropError::NotBound),
        };
        match outcome {
            Ok(Some(event)) => {
                for listener in &mut self.listeners {
                    listener(&event);
                }
                Some(event)
            }
            Ok(None) => {
                log::debug!("drop of {item} left order unchanged");
                None
            }
            Err(err) => {
                log::debug!("drop ignored: {err}");
                None
            }
        }
    }
}
