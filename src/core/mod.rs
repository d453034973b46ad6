//! # Core Domain
//!
//! Pure value types, no I/O, no policy.
//!
//! - `Position` - a slot coordinate `(row, column, order)`
//! - `Bounds` - per-axis capacity limits of a shelf
//! - `Item` - a tagged thing with its last-known coordinates
//! - `ItemId` - handle returned when an item is placed
//!
//! All placement policy lives in the shelf adapter; the core stays
//! fully testable in isolation.

mod item;
mod position;

// Re-exports
pub use item::{Item, ItemId};
pub use position::{Axis, Bounds, ParsePositionError, Position};
