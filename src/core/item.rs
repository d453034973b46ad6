//! # Item
//!
//! A tagged thing that can sit in a slot.
//!
//! Separation of concerns:
//! - `tag` = WHAT the item is (yours, opaque to the shelf)
//! - `position` = WHERE it was last successfully placed
//!
//! The cached position belongs to the shelf that placed the item:
//! only shelf code mutates it. An item knows its coordinates but
//! not which shelf they refer to, and an item removed from a shelf
//! keeps its last-known coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Handle to an item held by a shelf
///
/// Returned at insertion time and used for every later lookup or
/// removal. Handles are never reused, even after `clear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tagged item with its last-known slot coordinates
///
/// # Example
/// ```
/// use shelfspace::{Item, Position};
/// let item = Item::new("crate-a");
/// assert_eq!(item.tag(), "crate-a");
/// assert_eq!(item.position(), Position::UNPLACED);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    tag: String,
    position: Position,
}

impl Item {
    /// Create an item that is not on any shelf yet
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            position: Position::UNPLACED,
        }
    }

    /// The item's tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Where the item was last successfully placed
    ///
    /// `Position::UNPLACED` until a shelf maps it. May be stale once
    /// the item has been removed from its shelf.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Update the cached position. Shelf-only.
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl From<&str> for Item {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Item {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.tag, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_unplaced() {
        let item = Item::new("box");
        assert_eq!(item.tag(), "box");
        assert_eq!(item.position(), Position::UNPLACED);
    }

    #[test]
    fn test_set_position_updates_cache() {
        let mut item = Item::new("box");
        item.set_position(Position::new(1, 2, 3));
        assert_eq!(item.position(), Position::new(1, 2, 3));
    }

    #[test]
    fn test_from_conversions() {
        let a: Item = "pallet".into();
        assert_eq!(a.tag(), "pallet");

        let b: Item = String::from("pallet").into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let mut item = Item::new("box");
        assert_eq!(item.to_string(), "box @ (0,0,0)");
        item.set_position(Position::new(2, 1, 5));
        assert_eq!(item.to_string(), "box @ (2,1,5)");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ItemId(7).to_string(), "#7");
    }
}
