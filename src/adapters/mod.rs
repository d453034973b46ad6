//! # Adapters
//!
//! Implementations behind the ports.
//!
//! - `shelf` - the slot-allocation and indexing engine
//! - `recorder` - listener that logs events for later inspection
//! - `console` - text rendering of snapshots and events

mod console;
mod recorder;
mod shelf;

pub use console::{render_table, ConsoleListener};
pub use recorder::{EventRecorder, ShelfEvent};
pub use shelf::{Shelf, Snapshot};
