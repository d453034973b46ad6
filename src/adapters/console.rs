//! # Console Adapter
//!
//! Reporting conveniences: a plain-text grid renderer for shelf
//! snapshots and a listener that narrates events to stdout.
//!
//! Nothing here touches shelf state; both consume what the shelf
//! reports.

use std::fmt::Write as _;

use crate::adapters::Snapshot;
use crate::core::{Item, ItemId};
use crate::ports::{ShelfInfo, ShelfListener};

/// Render a snapshot as a text grid, one line per cell
///
/// ```text
/// aisle-7 (3 items)
/// 1.1 | x3 x2 x1 - - - - - - -
/// 1.2 | - - - - - - - - - -
/// ...
/// ```
pub fn render_table(snapshot: &Snapshot) -> String {
    let size = snapshot.size;
    let noun = if size == 1 { "item" } else { "items" };
    let mut out = format!("{} ({} {})\n", snapshot.tag, size, noun);
    for (row, columns) in &snapshot.rows {
        for (column, cell) in columns {
            let _ = write!(out, "{row}.{column} |");
            for slot in cell {
                match slot {
                    Some(tag) => {
                        let _ = write!(out, " {tag}");
                    }
                    None => out.push_str(" -"),
                }
            }
            out.push('\n');
        }
    }
    out
}

/// Listener that prints one line per shelf event
pub struct ConsoleListener;

impl ShelfListener for ConsoleListener {
    fn on_added_item(&self, item: &Item, shelf: &ShelfInfo<'_>) {
        println!("[{}] added {}", shelf.tag, item);
    }

    fn on_deleted_item(&self, item: &Item, shelf: &ShelfInfo<'_>) {
        println!("[{}] deleted {}", shelf.tag, item);
    }

    fn on_moved_item(&self, item: &Item, shelf: &ShelfInfo<'_>) {
        println!("[{}] moved {}", shelf.tag, item);
    }

    fn on_mapped_item(&self, item: &Item, shelf: &ShelfInfo<'_>) {
        println!("[{}] mapped {}", shelf.tag, item);
    }

    fn on_failed_adding_item(&self, item: &Item, shelf: &ShelfInfo<'_>, reason: Option<&str>) {
        println!(
            "[{}] add failed for {}: {}",
            shelf.tag,
            item.tag(),
            reason.unwrap_or("unknown")
        );
    }

    fn on_failed_deleting_item(&self, id: ItemId, shelf: &ShelfInfo<'_>, reason: Option<&str>) {
        println!(
            "[{}] delete failed for {}: {}",
            shelf.tag,
            id,
            reason.unwrap_or("unknown")
        );
    }

    fn on_failed_mapping_item(&self, item: &Item, shelf: &ShelfInfo<'_>, reason: Option<&str>) {
        println!(
            "[{}] mapping failed for {}: {}",
            shelf.tag,
            item.tag(),
            reason.unwrap_or("unknown")
        );
    }
}
