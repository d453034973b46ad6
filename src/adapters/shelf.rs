//! # Shelf Adapter
//!
//! The slot-allocation and indexing engine.
//!
//! A shelf owns a sparse three-level index `row -> column -> order`
//! over a flat arena of items. The index stores handles, never items:
//! [`Shelf::add_item`] returns an [`ItemId`] that all later lookups
//! and removals use.
//!
//! Index discipline:
//! - intermediate row/column maps are created lazily on first use
//! - deletion removes the leaf entry only, never prunes emptied maps
//! - the first-fit scan treats "row/column map exists" as a distinct
//!   signal from "slot occupied", so an absent map short-circuits the
//!   scan straight to position 1 of that row or column
//!
//! Every lifecycle transition is fanned out to the registered
//! listeners before the operation returns.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{Axis, Bounds, Item, ItemId, Position};
use crate::ports::{ShelfInfo, ShelfListener};

const REASON_SHELF_FULL: &str = "The shelf is already full!";
const REASON_MAPPING_FAILED: &str = "Mapping failed";
const REASON_NOT_FOUND: &str = "Item not found";
const REASON_NO_POSITION: &str = "Full, no position available";

fn oversize_reason(axis: Axis) -> &'static str {
    match axis {
        Axis::Row => "Over size row position",
        Axis::Column => "Over size column position",
        Axis::Order => "Over size order position",
    }
}

type OrderMap = HashMap<u32, ItemId>;
type ColumnMap = HashMap<u32, OrderMap>;
type RowMap = HashMap<u32, ColumnMap>;

/// A capacity-bounded three-dimensional slot store
///
/// # Example
/// ```
/// use shelfspace::{Item, Position, Shelf};
///
/// let mut shelf = Shelf::new("aisle-7");
/// let id = shelf.add_item(Item::new("crate-a")).expect("shelf has room");
/// assert_eq!(shelf.get(id).map(|i| i.position()), Some(Position::new(1, 1, 1)));
/// assert_eq!(shelf.to_string(), "aisle-7 (1 item)");
/// ```
pub struct Shelf {
    tag: String,
    bounds: Bounds,
    index: RowMap,
    items: HashMap<ItemId, Item>,
    listeners: Vec<Arc<dyn ShelfListener>>,
    next_id: u64,
}

impl Shelf {
    /// Create an empty shelf with the default bounds (5 x 3 x 10)
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_bounds(tag, Bounds::default())
    }

    /// Create an empty shelf with explicit bounds
    pub fn with_bounds(tag: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            tag: tag.into(),
            bounds,
            index: HashMap::new(),
            items: HashMap::new(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// The shelf's tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The shelf's capacity limits
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Register a listener. Listeners are notified in registration order.
    pub fn add_listener(&mut self, listener: Arc<dyn ShelfListener>) {
        self.listeners.push(listener);
    }

    /// Unregister a listener by identity. No-op when it was never registered.
    pub fn remove_listener(&mut self, listener: &Arc<dyn ShelfListener>) {
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
    }

    /// Place an item at the first free slot, displacing nothing
    ///
    /// On success the handle comes back and `on_mapped_item` then
    /// `on_added_item` fire. On failure the unplaced item is handed
    /// back and the reason has already reached the listeners through
    /// `on_failed_mapping_item` and `on_failed_adding_item`.
    pub fn add_item(&mut self, item: Item) -> Result<ItemId, Item> {
        self.insert(item, None)
    }

    /// Place an item at an explicit slot
    ///
    /// If the slot is occupied, the prior occupant is displaced: it is
    /// re-placed at the first free slot (`on_moved_item`) or, when the
    /// shelf is otherwise full, dropped (`on_deleted_item`). The
    /// displaced occupant never pushes a third item in turn.
    pub fn add_item_at(&mut self, item: Item, position: Position) -> Result<ItemId, Item> {
        self.insert(item, Some(position))
    }

    /// Remove an item from the shelf
    ///
    /// Resolution order: the slot at the item's cached position, when
    /// it holds this exact handle; otherwise a full index scan. The
    /// orphaned item keeps its last-known coordinates. Failure (handle
    /// unknown or already removed) emits `on_failed_deleting_item`.
    pub fn delete_item(&mut self, id: ItemId) -> Option<Item> {
        if self.unlink(id).is_some() {
            let item = self.items.remove(&id)?;
            debug!(shelf = %self.tag, item = %id, position = %item.position(), "item deleted");
            self.notify(|l, s| l.on_deleted_item(&item, s));
            Some(item)
        } else {
            warn!(shelf = %self.tag, item = %id, "delete failed: item not found");
            self.notify(|l, s| l.on_failed_deleting_item(id, s, Some(REASON_NOT_FOUND)));
            None
        }
    }

    /// Relocate an item to a new slot
    ///
    /// Currently observably identical to [`Shelf::delete_item`]: the
    /// item is removed and never re-inserted at `position`. Kept with
    /// this signature for compatibility with existing callers.
    pub fn set_item(&mut self, id: ItemId, position: Option<Position>) -> Option<Item> {
        let _ = position; // relocation half not implemented; removal only
        self.delete_item(id)
    }

    /// Clear the shelf and re-map a batch of items in scan order
    ///
    /// Items that find no slot are retried once after the rest have
    /// been placed; items still unplaced after the retry emit
    /// `on_failed_mapping_item` ("Full, no position available") and
    /// come back in the second element.
    pub fn map_items(&mut self, items: Vec<Item>) -> (Vec<ItemId>, Vec<Item>) {
        self.clear();
        let mut placed = Vec::new();
        let mut retry = Vec::new();
        for item in items {
            let id = self.admit(item);
            if self.map_item(id, None, false) {
                placed.push(id);
            } else {
                retry.push(id);
            }
        }
        let mut unplaced = Vec::new();
        for id in retry {
            if self.map_item(id, None, false) {
                placed.push(id);
            } else {
                self.emit_for(id, |l, item, s| {
                    l.on_failed_mapping_item(item, s, Some(REASON_NO_POSITION))
                });
                if let Some(item) = self.items.remove(&id) {
                    unplaced.push(item);
                }
            }
        }
        (placed, unplaced)
    }

    /// Drop every item and index entry. Handles are not reused.
    pub fn clear(&mut self) {
        self.index.clear();
        self.items.clear();
    }

    /// Number of occupied slots, counted by full index traversal
    pub fn size(&self) -> usize {
        self.index
            .values()
            .flat_map(|columns| columns.values())
            .map(|orders| orders.len())
            .sum()
    }

    /// Whether no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Look up an item by handle
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Whether the shelf holds this handle
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// The item occupying a slot, if any
    pub fn item_at(&self, position: Position) -> Option<&Item> {
        self.slot(position).and_then(|id| self.items.get(&id))
    }

    /// Exhaustive reverse lookup of a handle's slot in the index
    pub fn position_of(&self, id: ItemId) -> Option<Position> {
        self.scan_for(id)
    }

    /// The contents of one cell, front to back (length `max_order`)
    pub fn items_in_cell(&self, row: u32, column: u32) -> Vec<Option<&Item>> {
        (1..=self.bounds.max_order)
            .map(|order| self.item_at(Position::new(row, column, order)))
            .collect()
    }

    /// A serializable view of the whole shelf for rendering
    ///
    /// Every row and column within bounds is present; each cell is a
    /// tag-or-`None` list of length `max_order`.
    pub fn snapshot(&self) -> Snapshot {
        let mut rows = BTreeMap::new();
        for row in 1..=self.bounds.max_row {
            let mut columns = BTreeMap::new();
            for column in 1..=self.bounds.max_column {
                let cell = (1..=self.bounds.max_order)
                    .map(|order| {
                        self.item_at(Position::new(row, column, order))
                            .map(|item| item.tag().to_string())
                    })
                    .collect();
                columns.insert(column, cell);
            }
            rows.insert(row, columns);
        }
        Snapshot {
            tag: self.tag.clone(),
            bounds: self.bounds,
            size: self.size(),
            rows,
        }
    }

    // ---- placement engine ----

    fn insert(&mut self, item: Item, position: Option<Position>) -> Result<ItemId, Item> {
        let id = self.admit(item);
        if self.map_item(id, position, true) {
            debug!(shelf = %self.tag, item = %id, "item added");
            self.emit_for(id, |l, item, s| l.on_added_item(item, s));
            Ok(id)
        } else {
            let item = match self.items.remove(&id) {
                Some(item) => item,
                None => unreachable!("admitted item cannot vanish during mapping"),
            };
            warn!(shelf = %self.tag, tag = item.tag(), "add failed");
            self.notify(|l, s| l.on_failed_adding_item(&item, s, Some(REASON_MAPPING_FAILED)));
            Err(item)
        }
    }

    fn admit(&mut self, item: Item) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, item);
        id
    }

    /// Write an item into a slot, resolving and validating the target
    ///
    /// `push` enables displacement of a prior occupant. The re-placement
    /// of a displaced occupant always runs with `push = false`, so a
    /// cascade never goes more than one level deep.
    fn map_item(&mut self, id: ItemId, position: Option<Position>, push: bool) -> bool {
        let position = match position.or_else(|| self.first_free()) {
            Some(position) => position,
            None => {
                warn!(shelf = %self.tag, item = %id, "mapping failed: no free slot");
                self.emit_for(id, |l, item, s| {
                    l.on_failed_mapping_item(item, s, Some(REASON_SHELF_FULL))
                });
                return false;
            }
        };

        // All three axes are checked before any lazy map creation, so a
        // rejected placement leaves the index untouched.
        if let Some(axis) = self.bounds.first_violation(position) {
            let reason = oversize_reason(axis);
            warn!(shelf = %self.tag, item = %id, %position, reason, "mapping failed");
            self.emit_for(id, |l, item, s| l.on_failed_mapping_item(item, s, Some(reason)));
            return false;
        }

        let displaced = self
            .index
            .entry(position.row)
            .or_default()
            .entry(position.column)
            .or_default()
            .insert(position.order, id);

        if let Some(item) = self.items.get_mut(&id) {
            item.set_position(position);
        }

        if let Some(prev) = displaced {
            if push {
                if self.map_item(prev, None, false) {
                    self.emit_for(prev, |l, item, s| l.on_moved_item(item, s));
                } else if let Some(orphan) = self.items.remove(&prev) {
                    debug!(shelf = %self.tag, tag = orphan.tag(), "displaced item dropped");
                    self.notify(|l, s| l.on_deleted_item(&orphan, s));
                }
            } else {
                // Non-push placements target first-fit free slots, so this
                // only guards against an occupant with nowhere to go.
                self.items.remove(&prev);
            }
        }

        debug!(shelf = %self.tag, item = %id, %position, "item mapped");
        self.emit_for(id, |l, item, s| l.on_mapped_item(item, s));
        true
    }

    /// First-fit scan, lexicographic in `(row, column, order)`
    ///
    /// An absent row map means "this row has space at (row, 1, 1)";
    /// an absent column map means space at (row, column, 1). Deeper
    /// occupancy is not consulted in those cases, which matters
    /// because emptied maps are never pruned.
    fn first_free(&self) -> Option<Position> {
        for row in 1..=self.bounds.max_row {
            let columns = match self.index.get(&row) {
                Some(columns) => columns,
                None => return Some(Position::new(row, 1, 1)),
            };
            for column in 1..=self.bounds.max_column {
                let orders = match columns.get(&column) {
                    Some(orders) => orders,
                    None => return Some(Position::new(row, column, 1)),
                };
                for order in 1..=self.bounds.max_order {
                    if !orders.contains_key(&order) {
                        return Some(Position::new(row, column, order));
                    }
                }
            }
        }
        None
    }

    fn slot(&self, position: Position) -> Option<ItemId> {
        self.index
            .get(&position.row)?
            .get(&position.column)?
            .get(&position.order)
            .copied()
    }

    /// Remove the leaf entry at a slot. Row/column maps stay behind.
    fn remove_slot(&mut self, position: Position) -> bool {
        self.index
            .get_mut(&position.row)
            .and_then(|columns| columns.get_mut(&position.column))
            .and_then(|orders| orders.remove(&position.order))
            .is_some()
    }

    /// Drop a handle's index entry: cached position first, scan fallback
    fn unlink(&mut self, id: ItemId) -> Option<Position> {
        if let Some(cached) = self.items.get(&id).map(|item| item.position()) {
            if self.slot(cached) == Some(id) && self.remove_slot(cached) {
                return Some(cached);
            }
        }
        let position = self.scan_for(id)?;
        self.remove_slot(position).then_some(position)
    }

    /// Exhaustive reverse scan of the index for a handle
    fn scan_for(&self, id: ItemId) -> Option<Position> {
        for row in 1..=self.bounds.max_row {
            let Some(columns) = self.index.get(&row) else {
                continue;
            };
            for column in 1..=self.bounds.max_column {
                let Some(orders) = columns.get(&column) else {
                    continue;
                };
                for order in 1..=self.bounds.max_order {
                    if orders.get(&order) == Some(&id) {
                        return Some(Position::new(row, column, order));
                    }
                }
            }
        }
        None
    }

    // ---- notification fan-out ----

    fn notify(&self, f: impl Fn(&dyn ShelfListener, &ShelfInfo<'_>)) {
        let info = ShelfInfo {
            tag: &self.tag,
            bounds: self.bounds,
        };
        for listener in &self.listeners {
            f(listener.as_ref(), &info);
        }
    }

    fn emit_for(&self, id: ItemId, f: impl Fn(&dyn ShelfListener, &Item, &ShelfInfo<'_>)) {
        if let Some(item) = self.items.get(&id) {
            self.notify(|l, s| f(l, item, s));
        }
    }
}

impl fmt::Display for Shelf {
    /// `"<tag> (<n> item[s])"`, `item` for exactly one, `items` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let noun = if size == 1 { "item" } else { "items" };
        write!(f, "{} ({} {})", self.tag, size, noun)
    }
}

/// Point-in-time view of a shelf for external rendering
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    /// The shelf's tag
    pub tag: String,
    /// The shelf's capacity limits
    pub bounds: Bounds,
    /// Occupied slot count at snapshot time
    pub size: usize,
    /// `row -> column -> tags front to back` (length `max_order`, `None` = free)
    pub rows: BTreeMap<u32, BTreeMap<u32, Vec<Option<String>>>>,
}
