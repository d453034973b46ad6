//! # Shelfspace
//!
//! An in-memory, capacity-bounded, three-dimensional slot store.
//!
//! A [`Shelf`] places tagged items at discrete `(row, column, order)`
//! coordinates, the way a physical storage fixture holds crates: every
//! item occupies exactly one slot, new items take the first free slot
//! in scan order, and an item inserted at an occupied slot displaces
//! the prior occupant. Every lifecycle transition (add, delete, move,
//! mapping failure) is reported synchronously to registered
//! [`ShelfListener`]s.
//!
//! ## Key properties
//!
//! - **First-fit allocation**: deterministic lexicographic scan over
//!   `(row, column, order)`, short-circuiting on absent row/column structure
//! - **Displacement**: explicit placement at an occupied slot pushes the
//!   occupant to the first free slot, or drops it when the shelf is full;
//!   a push never cascades past one level
//! - **Handles, not identity**: insertion returns an [`ItemId`] used for
//!   all later lookups and removals
//! - **Failures are events**: operations return no error type; every
//!   failure reaches listeners as a human-readable reason
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use shelfspace::{EventRecorder, Item, Position, Shelf, ShelfEvent};
//!
//! let mut shelf = Shelf::new("aisle-7");
//! let recorder = Arc::new(EventRecorder::new());
//! shelf.add_listener(recorder.clone());
//!
//! let a = shelf.add_item(Item::new("crate-a")).expect("shelf has room");
//! let b = shelf.add_item(Item::new("crate-b")).expect("shelf has room");
//! assert_eq!(shelf.get(b).map(|i| i.position()), Some(Position::new(1, 1, 2)));
//!
//! // explicit placement at an occupied slot displaces crate-a
//! shelf.add_item_at(Item::new("crate-c"), Position::new(1, 1, 1)).unwrap();
//! assert_eq!(shelf.get(a).map(|i| i.position()), Some(Position::new(1, 1, 3)));
//! assert!(recorder.events().contains(&ShelfEvent::Moved {
//!     tag: "crate-a".into(),
//!     position: Position::new(1, 1, 3),
//! }));
//! ```

pub mod adapters;
pub mod core;
pub mod ports;

// Re-exports for convenience
pub use adapters::{render_table, ConsoleListener, EventRecorder, Shelf, ShelfEvent, Snapshot};
pub use core::{Axis, Bounds, Item, ItemId, ParsePositionError, Position};
pub use ports::{ItemChange, ItemListener, ShelfInfo, ShelfListener};
