//! Note generation module.
//!
//! Provides the synthesize-then-write pipeline over a note table.

pub mod pipeline;

// Re-export commonly used items
pub use pipeline::{generate_all, generate_all_with_progress, generate_note, FailurePolicy};
