//! # Event Recorder Adapter
//!
//! A listener that keeps every shelf event it sees.
//!
//! Events are flattened into owned [`ShelfEvent`] values so they can
//! be inspected after the operation that produced them has returned.
//! Used by the test suites and by the CLI's verbose mode.

use std::sync::{Mutex, MutexGuard};

use crate::core::{Item, ItemId, Position};
use crate::ports::{ShelfInfo, ShelfListener};

/// An owned record of one shelf lifecycle event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShelfEvent {
    Added { tag: String, position: Position },
    Deleted { tag: String, position: Position },
    Moved { tag: String, position: Position },
    Changed { tag: String },
    Mapped { tag: String, position: Position },
    FailedAdding { tag: String, reason: Option<String> },
    FailedDeleting { id: ItemId, reason: Option<String> },
    FailedMapping { tag: String, reason: Option<String> },
}

/// Thread-safe event log implementing [`ShelfListener`]
#[derive(Default)]
pub struct EventRecorder {
    events: Mutex<Vec<ShelfEvent>>,
}

impl EventRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far, in emission order
    pub fn events(&self) -> Vec<ShelfEvent> {
        self.lock().clone()
    }

    /// Drain the log, returning what was recorded
    pub fn take(&self) -> Vec<ShelfEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ShelfEvent>> {
        // a listener that panicked mid-push left a valid Vec behind
        match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn push(&self, event: ShelfEvent) {
        self.lock().push(event);
    }
}

impl ShelfListener for EventRecorder {
    fn on_added_item(&self, item: &Item, _shelf: &ShelfInfo<'_>) {
        self.push(ShelfEvent::Added {
            tag: item.tag().to_string(),
            position: item.position(),
        });
    }

    fn on_deleted_item(&self, item: &Item, _shelf: &ShelfInfo<'_>) {
        self.push(ShelfEvent::Deleted {
            tag: item.tag().to_string(),
            position: item.position(),
        });
    }

    fn on_moved_item(&self, item: &Item, _shelf: &ShelfInfo<'_>) {
        self.push(ShelfEvent::Moved {
            tag: item.tag().to_string(),
            position: item.position(),
        });
    }

    fn on_changed_item(&self, item: &Item, _shelf: Option<&ShelfInfo<'_>>) {
        self.push(ShelfEvent::Changed {
            tag: item.tag().to_string(),
        });
    }

    fn on_mapped_item(&self, item: &Item, _shelf: &ShelfInfo<'_>) {
        self.push(ShelfEvent::Mapped {
            tag: item.tag().to_string(),
            position: item.position(),
        });
    }

    fn on_failed_adding_item(&self, item: &Item, _shelf: &ShelfInfo<'_>, reason: Option<&str>) {
        self.push(ShelfEvent::FailedAdding {
            tag: item.tag().to_string(),
            reason: reason.map(str::to_string),
        });
    }

    fn on_failed_deleting_item(&self, id: ItemId, _shelf: &ShelfInfo<'_>, reason: Option<&str>) {
        self.push(ShelfEvent::FailedDeleting {
            id,
            reason: reason.map(str::to_string),
        });
    }

    fn on_failed_mapping_item(&self, item: &Item, _shelf: &ShelfInfo<'_>, reason: Option<&str>) {
        self.push(ShelfEvent::FailedMapping {
            tag: item.tag().to_string(),
            reason: reason.map(str::to_string),
        });
    }
}
