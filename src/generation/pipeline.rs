//! Generation pipeline for note tables.
//!
//! Synthesizes each note of a table and writes it to its own WAV file,
//! one note at a time.

use std::time::Instant;

use crate::audio::{samples_to_duration, write_wav};
use crate::config::GeneratorConfig;
use crate::error::{PianoError, Result};
use crate::synth::synthesize_note;
use crate::types::{FailedNote, GeneratedFile, GenerationReport, Note, NoteTable};

/// What to do when a note fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing note and return its error.
    #[default]
    Abort,
    /// Record the failure and continue with the remaining notes.
    Continue,
}

/// Synthesizes `note` and writes it under the configured output directory.
///
/// # Returns
///
/// A record of the written file.
pub fn generate_note(note: &Note, config: &GeneratorConfig) -> Result<GeneratedFile> {
    let path = config.output_path(&note.name);

    log::debug!(
        "Synthesizing {} ({} Hz, {}s at {} Hz)",
        note.name,
        note.frequency,
        config.duration_sec,
        config.sample_rate
    );

    let start_time = Instant::now();
    let samples = synthesize_note(note, config)?;
    write_wav(&samples, &path, config.sample_rate)?;

    log::info!(
        "Wrote {} ({} samples) in {:.1}ms",
        path.display(),
        samples.len(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(GeneratedFile {
        note: note.name.clone(),
        frequency: note.frequency,
        path,
        sample_count: samples.len(),
        duration_sec: samples_to_duration(samples.len(), config.sample_rate),
    })
}

/// Generates every note of `table` in order.
///
/// The configuration and the table are validated before any file is written.
pub fn generate_all(
    table: &NoteTable,
    config: &GeneratorConfig,
    policy: FailurePolicy,
) -> Result<GenerationReport> {
    generate_all_with_progress(table, config, policy, |_| {})
}

/// Generates every note of `table`, calling `on_note` after each written file.
///
/// # Arguments
///
/// * `table` - Notes to generate, in output order
/// * `config` - Shared rate, duration, amplitude and output location
/// * `policy` - Whether a failing note aborts the run
/// * `on_note` - Callback receiving each written file
///
/// # Errors
///
/// `INVALID_ARGUMENT` or `INVALID_NOTE_TABLE` when validation fails. Under
/// [`FailurePolicy::Abort`], the first note error is returned as is.
pub fn generate_all_with_progress<F>(
    table: &NoteTable,
    config: &GeneratorConfig,
    policy: FailurePolicy,
    mut on_note: F,
) -> Result<GenerationReport>
where
    F: FnMut(&GeneratedFile),
{
    if let Some(reason) = config.validate() {
        return Err(PianoError::invalid_argument(reason));
    }

    if let Some(reason) = table.validate() {
        return Err(PianoError::invalid_note_table(reason));
    }

    log::debug!(
        "Generating {} note(s) into {}",
        table.len(),
        config.effective_output_dir().display()
    );

    let mut report = GenerationReport::default();

    for note in table {
        match generate_note(note, config) {
            Ok(file) => {
                on_note(&file);
                report.generated.push(file);
            }
            Err(e) if policy == FailurePolicy::Continue => {
                log::warn!("Skipping note {}: {}", note.name, e);
                report.failed.push(FailedNote::new(&note.name, &e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
