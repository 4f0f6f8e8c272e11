//! Shared handle over a `ReorderEngine` for callback-driven hosts.
//!
//! Timers, drop handlers and event listeners each hold a clone. Borrows of the
//! engine never outlive a single engine call, and move listeners run after the
//! borrow is released, so a listener may reconfigure, refresh or subscribe
//! through its own clone.

#[cfg(test)]
#[path = "shared_test.rs"]
mod shared_test;

use std::cell::{BorrowError, BorrowMutError, RefCell};
use std::rc::Rc;

use super::container::ContainerKey;
use super::engine::{Listener, MoveEvent, RebuildTicket, ReorderEngine};
use super::registry::ContainerRegistry;
use crate::item::ItemId;

/// The engine or listener list was already borrowed further up the stack.
#[derive(Debug, thiserror::Error)]
pub enum BusyError {
    #[error("reorder engine is being mutated: {0}")]
    Read(#[from] BorrowError),
    #[error("reorder engine is in use: {0}")]
    Write(#[from] BorrowMutError),
}

pub struct SharedReorder<H> {
    engine: Rc<RefCell<ReorderEngine<H>>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl<H> Clone for SharedReorder<H> {
    fn clone(&self) -> Self {
        Self { engine: Rc::clone(&self.engine), listeners: Rc::clone(&self.listeners) }
    }
}

impl<H> Default for SharedReorder<H> {
    fn default() -> Self {
        Self { engine: Rc::new(RefCell::new(ReorderEngine::new())), listeners: Rc::default() }
    }
}

impl<H> std::fmt::Debug for SharedReorder<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedReorder").field("engine", &self.engine).finish_non_exhaustive()
    }
}

impl<H> SharedReorder<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a move listener. Listeners added while a move is being
    /// announced start with the next move.
    pub fn subscribe(&self, listener: impl FnMut(&MoveEvent) + 'static) -> Result<(), BusyError> {
        self.listeners.try_borrow_mut()?.push(Box::new(listener));
        Ok(())
    }

    pub fn configure(&self, keys: impl IntoIterator<Item = ContainerKey>) -> Result<RebuildTicket, BusyError> {
        Ok(self.engine.try_borrow_mut()?.configure(keys))
    }

    pub fn rebuild<R>(&self, ticket: RebuildTicket, registry: &R) -> Result<bool, BusyError>
    where
        R: ContainerRegistry<Handle = H>,
    {
        Ok(self.engine.try_borrow_mut()?.rebuild(ticket, registry))
    }

    pub fn refresh<R>(&self, registry: &R) -> Result<bool, BusyError>
    where
        R: ContainerRegistry<Handle = H>,
    {
        Ok(self.engine.try_borrow_mut()?.refresh(registry))
    }

    /// Apply a completed drop, then announce the move to every listener.
    pub fn on_drop(
        &self,
        item: &ItemId,
        source: &ContainerKey,
        target: &ContainerKey,
        sibling: Option<&ItemId>,
    ) -> Result<Option<MoveEvent>, BusyError> {
        let event = self.engine.try_borrow_mut()?.on_drop(item, source, target, sibling);
        if let Some(event) = &event {
            self.notify(event)?;
        }
        Ok(event)
    }

    /// Read the engine state.
    pub fn inspect<T>(&self, read: impl FnOnce(&ReorderEngine<H>) -> T) -> Result<T, BusyError> {
        let engine = self.engine.try_borrow()?;
        Ok(read(&*engine))
    }

    fn notify(&self, event: &MoveEvent) -> Result<(), BusyError> {
        let mut running = std::mem::take(&mut *self.listeners.try_borrow_mut()?);
        for listener in &mut running {
            listener(event);
        }
        let mut slot = self.listeners.try_borrow_mut()?;
        running.append(&mut slot);
        *slot = running;
        Ok(())
    }
}
