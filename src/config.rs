//! Generator configuration module.
//!
//! Contains the parameters shared by every note of a run: sample rate,
//! note duration, amplitude and where the WAV files go.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::synth::sample_count;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default note duration in seconds.
pub const DEFAULT_DURATION_SEC: f64 = 0.5;

/// Default pre-normalization amplitude.
pub const DEFAULT_AMPLITUDE: f64 = 0.95;

/// Default output filename prefix.
pub const DEFAULT_FILE_PREFIX: &str = "piano";

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 384_000;

/// Longest accepted note duration in seconds.
pub const MAX_DURATION_SEC: f64 = 60.0;

/// Runtime configuration for a generation run.
///
/// Built from defaults, then environment variables, then command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Samples per second written to every file.
    pub sample_rate: u32,

    /// Length of every note in seconds.
    pub duration_sec: f64,

    /// Pre-normalization weight (0.0-1.0). Peak normalization overrides it
    /// except at 0.0, which produces silence.
    pub amplitude: f64,

    /// Directory for the generated files.
    /// If None, files are written to the current directory.
    pub output_dir: Option<PathBuf>,

    /// Filename prefix; files are named `<prefix>-<note>.wav`.
    pub file_prefix: String,
}

impl GeneratorConfig {
    /// Creates a new GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a GeneratorConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `PIANO_SAMPLE_RATE` - Sample rate in Hz
    /// - `PIANO_DURATION` - Note duration in seconds
    /// - `PIANO_AMPLITUDE` - Amplitude (0.0-1.0)
    /// - `PIANO_OUTPUT_DIR` - Output directory
    /// - `PIANO_FILE_PREFIX` - Output filename prefix
    ///
    /// Falls back to defaults for unset or invalid variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rate_str) = lookup("PIANO_SAMPLE_RATE") {
            if let Ok(rate) = rate_str.trim().parse::<u32>() {
                if rate > 0 && rate <= MAX_SAMPLE_RATE {
                    config.sample_rate = rate;
                }
            }
        }

        if let Some(duration_str) = lookup("PIANO_DURATION") {
            if let Ok(duration) = duration_str.trim().parse::<f64>() {
                if duration > 0.0 && duration <= MAX_DURATION_SEC {
                    config.duration_sec = duration;
                }
            }
        }

        if let Some(amplitude_str) = lookup("PIANO_AMPLITUDE") {
            if let Ok(amplitude) = amplitude_str.trim().parse::<f64>() {
                if (0.0..=1.0).contains(&amplitude) {
                    config.amplitude = amplitude;
                }
            }
        }

        if let Some(path) = lookup("PIANO_OUTPUT_DIR") {
            if !path.is_empty() {
                config.output_dir = Some(PathBuf::from(path));
            }
        }

        if let Some(prefix) = lookup("PIANO_FILE_PREFIX") {
            if !prefix.is_empty() {
                config.file_prefix = prefix;
            }
        }

        config
    }

    /// Returns the effective output directory, defaulting to the current directory.
    pub fn effective_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Returns the full path of the WAV file for `note_name`.
    pub fn output_path(&self, note_name: &str) -> PathBuf {
        output_path_in(&self.effective_output_dir(), &self.file_prefix, note_name)
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.sample_rate == 0 {
            return Some("sample_rate must be > 0".to_string());
        }

        if self.sample_rate > MAX_SAMPLE_RATE {
            return Some(format!(
                "sample_rate too high: {} (max {})",
                self.sample_rate, MAX_SAMPLE_RATE
            ));
        }

        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Some(format!("duration must be > 0, got {}", self.duration_sec));
        }

        if self.duration_sec > MAX_DURATION_SEC {
            return Some(format!(
                "duration too long: {}s (max {}s)",
                self.duration_sec, MAX_DURATION_SEC
            ));
        }

        if sample_count(self.sample_rate, self.duration_sec) == 0 {
            return Some(format!(
                "duration too short: {}s at {} Hz produces no samples",
                self.duration_sec, self.sample_rate
            ));
        }

        if !(0.0..=1.0).contains(&self.amplitude) {
            return Some(format!(
                "amplitude must be between 0.0 and 1.0, got {}",
                self.amplitude
            ));
        }

        if self.file_prefix.contains(['/', '\\']) {
            return Some(format!(
                "file_prefix cannot contain path separators: {:?}",
                self.file_prefix
            ));
        }

        None
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_sec: DEFAULT_DURATION_SEC,
            amplitude: DEFAULT_AMPLITUDE,
            output_dir: None,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

/// Returns the WAV filename for a note: `<prefix>-<note>.wav`.
///
/// An empty prefix yields `<note>.wav`.
pub fn output_file_name(prefix: &str, note_name: &str) -> String {
    if prefix.is_empty() {
        format!("{}.wav", note_name)
    } else {
        format!("{}-{}.wav", prefix, note_name)
    }
}

fn output_path_in(dir: &Path, prefix: &str, note_name: &str) -> PathBuf {
    dir.join(output_file_name(prefix, note_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_piano_table_settings() {
        let config = GeneratorConfig::new();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.duration_sec, 0.5);
        assert_eq!(config.amplitude, 0.95);
        assert!(config.output_dir.is_none());
        assert_eq!(config.file_prefix, "piano");
        assert!(config.validate().is_none());
    }

    #[test]
    fn file_names() {
        assert_eq!(output_file_name("piano", "c"), "piano-c.wav");
        assert_eq!(output_file_name("", "c"), "c.wav");

        let config = GeneratorConfig::default();
        assert_eq!(config.output_path("d"), PathBuf::from("./piano-d.wav"));

        let config = GeneratorConfig {
            output_dir: Some(PathBuf::from("samples")),
            file_prefix: "keys".to_string(),
            ..GeneratorConfig::default()
        };
        assert_eq!(config.output_path("e"), PathBuf::from("samples/keys-e.wav"));
    }

    #[test]
    fn config_validation() {
        let mut config = GeneratorConfig::new();

        config.sample_rate = 0;
        assert!(config.validate().is_some());
        config.sample_rate = 44100;

        config.duration_sec = 0.0;
        assert!(config.validate().is_some());
        config.duration_sec = -1.0;
        assert!(config.validate().is_some());
        config.duration_sec = f64::NAN;
        assert!(config.validate().is_some());
        config.duration_sec = 0.000001;
        assert!(config.validate().unwrap().contains("no samples"));
        config.duration_sec = 0.001;
        assert!(config.validate().is_none());
        config.duration_sec = 0.5;

        config.amplitude = 1.5;
        assert!(config.validate().is_some());
        config.amplitude = 0.0;
        assert!(config.validate().is_none());

        config.file_prefix = "../piano".to_string();
        assert!(config.validate().is_some());
    }

    #[test]
    fn from_lookup_defaults() {
        let config = GeneratorConfig::from_lookup(|_| None);
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn from_lookup_overrides() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("PIANO_SAMPLE_RATE", "48000"),
            ("PIANO_DURATION", "1.5"),
            ("PIANO_AMPLITUDE", "0.5"),
            ("PIANO_OUTPUT_DIR", "/tmp/notes"),
            ("PIANO_FILE_PREFIX", "keys"),
        ]));
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.duration_sec, 1.5);
        assert_eq!(config.amplitude, 0.5);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/notes")));
        assert_eq!(config.file_prefix, "keys");
    }

    #[test]
    fn from_lookup_ignores_invalid_values() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("PIANO_SAMPLE_RATE", "0"),
            ("PIANO_DURATION", "-2"),
            ("PIANO_AMPLITUDE", "loud"),
            ("PIANO_OUTPUT_DIR", ""),
        ]));
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn deserializes_partial_json() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"duration_sec": 0.25, "file_prefix": "keys"}"#).unwrap();
        assert_eq!(config.duration_sec, 0.25);
        assert_eq!(config.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(config.file_prefix, "keys");
    }
}
