//! # Ports
//!
//! Trait definitions for collaborators. Contracts only, no implementations.
//!
//! This is the hexagonal boundary:
//! - Ports define WHAT the shelf reports to the outside
//! - Adapters define HOW those reports are consumed
//!
//! The core doesn't know about adapters; adapters implement these traits.

mod listener;

// Re-export traits
pub use listener::{ItemListener, ShelfListener};

// Re-export supporting types
pub use listener::{ItemChange, ShelfInfo};
