//! # Listener Port
//!
//! The observer contract for shelf lifecycle events.
//!
//! A shelf owns an ordered list of listeners and notifies them
//! synchronously, in registration order, before the operation that
//! produced the event returns. Every failure mode of a shelf travels
//! through the `on_failed_*` callbacks as a human-readable reason;
//! shelf operations never return an error type.
//!
//! Listeners run inside the mutating operation, so they receive a
//! borrowed [`ShelfInfo`] view instead of the shelf itself.

use crate::core::{Bounds, Item, ItemId, Position};

/// Borrowed view of a shelf, handed to listeners during notification
#[derive(Clone, Copy, Debug)]
pub struct ShelfInfo<'a> {
    /// The shelf's tag
    pub tag: &'a str,
    /// The shelf's capacity limits
    pub bounds: Bounds,
}

/// Observer of shelf lifecycle transitions
///
/// All callbacks default to no-ops, so a listener implements only
/// the events it cares about. A listener that panics is not guarded
/// against.
#[allow(unused_variables)]
pub trait ShelfListener: Send + Sync {
    /// An item was added to the shelf (fires after `on_mapped_item`)
    fn on_added_item(&self, item: &Item, shelf: &ShelfInfo<'_>) {}

    /// An item left the shelf: explicit deletion, or dropped because a
    /// displacement found no free slot for it
    fn on_deleted_item(&self, item: &Item, shelf: &ShelfInfo<'_>) {}

    /// A displaced item was re-placed at a new slot
    fn on_moved_item(&self, item: &Item, shelf: &ShelfInfo<'_>) {}

    /// Reserved for item-level change tracking; no emitter is wired
    /// to this yet
    fn on_changed_item(&self, item: &Item, shelf: Option<&ShelfInfo<'_>>) {}

    /// An item was written into a slot (also fires for the re-placement
    /// of a displaced item, before its `on_moved_item`)
    fn on_mapped_item(&self, item: &Item, shelf: &ShelfInfo<'_>) {}

    /// A top-level add failed; the specific cause was already reported
    /// through `on_failed_mapping_item`
    fn on_failed_adding_item(&self, item: &Item, shelf: &ShelfInfo<'_>, reason: Option<&str>) {}

    /// A deletion failed. Only the handle is known: a handle that
    /// resolves to an item always resolves to an occupied slot
    fn on_failed_deleting_item(&self, id: ItemId, shelf: &ShelfInfo<'_>, reason: Option<&str>) {}

    /// A placement failed: no free slot anywhere, or an axis exceeded
    /// the shelf's bounds
    fn on_failed_mapping_item(&self, item: &Item, shelf: &ShelfInfo<'_>, reason: Option<&str>) {}
}

/// A change to one field of an item
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemChange {
    Tag { old: String, new: String },
    Position { old: Position, new: Position },
}

/// Observer of item-level field changes
///
/// Narrower companion to [`ShelfListener`]. Declared for symmetry
/// with the shelf contract; no emitter is wired to it yet.
pub trait ItemListener: Send + Sync {
    fn on_changed(&self, change: &ItemChange);
}
