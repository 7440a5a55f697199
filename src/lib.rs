//! piano-notes: piano-like tone sample generator.
//!
//! Synthesizes short notes (a fundamental plus a second harmonic, shaped by
//! an exponential envelope and peak-normalized) and writes each one as a
//! mono 16-bit PCM WAV file.
//!
//! # Modules
//!
//! - [`synth`]: Tone synthesis (waveform, envelope, normalization)
//! - [`audio`]: WAV writing and read-back
//! - [`generation`]: Per-note pipeline over a note table
//! - [`types`]: Core data types (Note, NoteTable, GenerationReport)
//! - [`config`]: Run configuration (GeneratorConfig)
//! - [`error`]: Error types and codes (PianoError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use piano_notes::{generate_all, FailurePolicy, GeneratorConfig, NoteTable};
//!
//! let config = GeneratorConfig {
//!     duration_sec: 0.25,
//!     ..Default::default()
//! };
//!
//! // Writes piano-c.wav, piano-d.wav, piano-e.wav and piano-f.wav
//! let report = generate_all(&NoteTable::default(), &config, FailurePolicy::Abort)?;
//! assert!(report.is_complete());
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod synth;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::GeneratorConfig;
pub use error::{ErrorCode, PianoError, Result};
pub use generation::{generate_all, generate_note, FailurePolicy};
pub use synth::synthesize_tone;
pub use types::{GeneratedFile, GenerationReport, Note, NoteTable};
