//! Active-item marking for the carousel strip.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::item::ItemId;

/// Rendering surface holding the carousel items.
pub trait ItemSurface {
    /// Mark or unmark the item at `position` as the active one.
    fn mark(&mut self, position: usize, item: &ItemId, active: bool);

    /// Ask the surface to scroll the item at `position` into view.
    fn bring_into_view(&mut self, position: usize, item: &ItemId);
}

/// Make the item at `index` the only active item and bring it into view.
///
/// `index` is clamped into range. Returns the active item, or `None` (touching
/// nothing) when `items` is empty.
pub fn set_active_visual<'a, S: ItemSurface + ?Sized>(
    surface: &mut S,
    index: usize,
    items: &'a [ItemId],
) -> Option<&'a ItemId> {
    let last = items.len().checked_sub(1)?;
    let active = index.min(last);
    for (position, item) in items.iter().enumerate() {
        surface.mark(position, item, position == active);
    }
    let item = &items[active];
    surface.bring_into_view(active, item);
    Some(item)
}
