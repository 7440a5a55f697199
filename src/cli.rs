//! CLI argument parser.
//!
//! Command-line flags override the environment-derived configuration and
//! select the note table.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GeneratorConfig;
use crate::error::{PianoError, Result};
use crate::generation::FailurePolicy;
use crate::types::NoteTable;

/// piano-notes: synthesize piano-like note samples as WAV files
#[derive(Parser, Debug)]
#[command(name = "piano-notes")]
#[command(about = "Synthesize piano-like note samples as mono 16-bit WAV files")]
#[command(version)]
pub struct Cli {
    /// Directory to write the WAV files into (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Sample rate in Hz (default 44100)
    #[arg(short = 'r', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub sample_rate: Option<u32>,

    /// Duration of every note in seconds (default 0.5)
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Pre-normalization amplitude, 0.0-1.0 (default 0.95; 0.0 writes silence)
    #[arg(short, long)]
    pub amplitude: Option<f64>,

    /// Output filename prefix; files are named <PREFIX>-<NOTE>.wav (default "piano")
    #[arg(long)]
    pub prefix: Option<String>,

    /// Note to generate, as NAME=FREQ or a pitch like C4 (repeatable; replaces the default table)
    #[arg(short, long = "note", value_name = "NOTE")]
    pub notes: Vec<String>,

    /// JSON file with an array of {"name", "frequency"} notes
    #[arg(long, conflicts_with = "notes")]
    pub notes_file: Option<PathBuf>,

    /// Keep generating the remaining notes when one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Log each written file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Applies the flags that were given on top of `base`.
    pub fn apply_to(&self, base: GeneratorConfig) -> GeneratorConfig {
        let mut config = base;

        if let Some(ref dir) = self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if let Some(duration) = self.duration {
            config.duration_sec = duration;
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude = amplitude;
        }
        if let Some(ref prefix) = self.prefix {
            config.file_prefix = prefix.clone();
        }

        config
    }

    /// Returns the effective configuration: environment, then flags.
    pub fn config(&self) -> GeneratorConfig {
        self.apply_to(GeneratorConfig::from_env())
    }

    /// Returns the note table selected by `--note`, `--notes-file` or the default.
    pub fn note_table(&self) -> Result<NoteTable> {
        if let Some(ref path) = self.notes_file {
            NoteTable::load(path)
        } else if !self.notes.is_empty() {
            NoteTable::from_args(&self.notes)
        } else {
            Ok(NoteTable::default())
        }
    }

    /// Returns the failure policy selected by `--keep-going`.
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        }
    }

    /// Returns the default log filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// Validates the effective configuration and note table together.
    pub fn resolve(&self) -> Result<(GeneratorConfig, NoteTable)> {
        let config = self.config();
        if let Some(reason) = config.validate() {
            return Err(PianoError::invalid_argument(reason));
        }
        let table = self.note_table()?;
        Ok((config, table))
    }
}
