//! Records describing the outcome of a generation run.
//!
//! A [`GeneratedFile`] is written for every note that produced a WAV file;
//! a [`FailedNote`] for every note skipped under the continue policy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PianoError;

/// A WAV file produced for one note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Name of the note (e.g. "c").
    pub note: String,

    /// Fundamental frequency in Hz.
    pub frequency: f64,

    /// Path of the written WAV file.
    pub path: PathBuf,

    /// Number of 16-bit samples in the data chunk.
    pub sample_count: usize,

    /// Audio length in seconds.
    pub duration_sec: f64,
}

/// A note whose generation failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedNote {
    /// Name of the note.
    pub note: String,

    /// Error code string (e.g. "WAV_WRITE_FAILED").
    pub code: String,

    /// Short description of the error class.
    pub description: String,

    /// Error message.
    pub message: String,
}

impl FailedNote {
    /// Creates a FailedNote from the error that stopped the note.
    pub fn new(note: impl Into<String>, error: &PianoError) -> Self {
        Self {
            note: note.into(),
            code: error.code.as_str().to_string(),
            description: error.code.description().to_string(),
            message: error.message.clone(),
        }
    }
}

/// Outcome of generating a whole note table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Files written, in note table order.
    pub generated: Vec<GeneratedFile>,

    /// Notes that failed, in note table order.
    pub failed: Vec<FailedNote>,
}

impl GenerationReport {
    /// Returns true if every note was generated.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of notes attempted.
    pub fn attempted(&self) -> usize {
        self.generated.len() + self.failed.len()
    }
}
