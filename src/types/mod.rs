//! Core types for piano-notes.
//!
//! - [`Note`]: a named fundamental frequency
//! - [`NoteTable`]: the ordered notes generated by one run
//! - [`GeneratedFile`] / [`GenerationReport`]: the outcome of a run

mod note;
mod report;

// Re-export all types at the module level
pub use note::{
    pitch_to_frequency, Note, NoteTable, A4_FREQUENCY, DEFAULT_NOTES, MAX_NOTE_NAME_LEN,
};
pub use report::{FailedNote, GeneratedFile, GenerationReport};
