//! Note and NoteTable types.
//!
//! A Note pairs a name with a fundamental frequency. The name ends up in the
//! output filename, so it is restricted to a filesystem-safe character set.
//! A NoteTable is the ordered list of notes processed by one run.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{ErrorCode, PianoError, Result};

/// Maximum length of a note name in characters.
pub const MAX_NOTE_NAME_LEN: usize = 32;

/// Reference pitch for equal temperament conversion (A4).
pub const A4_FREQUENCY: f64 = 440.0;

/// MIDI note number of A4.
const A4_MIDI: i32 = 69;

/// Default note table: C4 to F4.
pub const DEFAULT_NOTES: [(&str, f64); 4] = [
    ("c", 261.63),
    ("d", 293.66),
    ("e", 329.63),
    ("f", 349.23),
];

/// A named note with its fundamental frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier used in the output filename (e.g. "c" -> piano-c.wav).
    pub name: String,

    /// Fundamental frequency in Hz.
    pub frequency: f64,
}

impl Note {
    /// Creates a new Note.
    pub fn new(name: impl Into<String>, frequency: f64) -> Self {
        Self {
            name: name.into(),
            frequency,
        }
    }

    /// Creates a Note from a scientific pitch such as `C4`, `a#3` or `Bb5`.
    ///
    /// The frequency uses twelve-tone equal temperament with A4 = 440 Hz and
    /// the name is the lowercase pitch. Returns None for unparsable input.
    pub fn from_pitch(pitch: &str) -> Option<Self> {
        let pitch = pitch.trim();
        let frequency = pitch_to_frequency(pitch)?;
        Some(Self::new(pitch.to_lowercase(), frequency))
    }

    /// Parses a command-line note: `NAME=FREQ` or a bare scientific pitch.
    pub fn parse(arg: &str) -> Result<Self> {
        let note = match arg.split_once('=') {
            Some((name, freq)) => {
                let frequency = freq.trim().parse::<f64>().map_err(|e| {
                    PianoError::with_source(
                        ErrorCode::InvalidNoteTable,
                        format!("Invalid frequency in note '{}'", arg),
                        e,
                    )
                })?;
                Note::new(name.trim(), frequency)
            }
            None => Note::from_pitch(arg).ok_or_else(|| {
                PianoError::invalid_note_table(format!(
                    "'{}' is neither NAME=FREQ nor a pitch like C4",
                    arg
                ))
            })?,
        };

        if let Some(reason) = note.validate() {
            return Err(PianoError::invalid_note_table(reason));
        }
        Ok(note)
    }

    /// Validates the note.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("Note name cannot be empty".to_string());
        }

        if self.name.len() > MAX_NOTE_NAME_LEN {
            return Some(format!(
                "Note name too long: {} characters (max {})",
                self.name.len(),
                MAX_NOTE_NAME_LEN
            ));
        }

        if !self.name.chars().all(is_name_char) {
            return Some(format!(
                "Note name '{}' may only contain letters, digits, '#', '_' or '-'",
                self.name
            ));
        }

        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Some(format!(
                "Note '{}' must have a frequency > 0 Hz, got {}",
                self.name, self.frequency
            ));
        }

        None
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '#' | '_' | '-')
}

/// Converts a scientific pitch (`C4`, `F#3`, `Bb-1`) to its frequency in Hz.
pub fn pitch_to_frequency(pitch: &str) -> Option<f64> {
    let mut chars = pitch.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let semitone = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let (accidental, octave) = if let Some(octave) = rest.strip_prefix('#') {
        (1, octave)
    } else if let Some(octave) = rest.strip_prefix('b') {
        (-1, octave)
    } else {
        (0, rest)
    };

    let octave: i32 = octave.parse().ok()?;
    if !(-1..=9).contains(&octave) {
        return None;
    }

    let midi = (octave + 1) * 12 + semitone + accidental;
    Some(A4_FREQUENCY * 2f64.powf(f64::from(midi - A4_MIDI) / 12.0))
}

/// Ordered list of notes to generate.
///
/// Serialized as a JSON array of `{"name": ..., "frequency": ...}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteTable {
    notes: Vec<Note>,
}

impl NoteTable {
    /// Creates a table from notes in output order.
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// The C4-F4 piano table.
    pub fn piano_default() -> Self {
        Self::new(
            DEFAULT_NOTES
                .iter()
                .map(|(name, frequency)| Note::new(*name, *frequency))
                .collect(),
        )
    }

    /// Builds a table from `--note` arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let notes = args
            .iter()
            .map(|arg| Note::parse(arg.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(notes))
    }

    /// Parses a table from a JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            PianoError::with_source(
                ErrorCode::InvalidNoteTable,
                format!("Invalid note table JSON: {}", e),
                e,
            )
        })
    }

    /// Loads a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            PianoError::with_source(
                ErrorCode::InvalidNoteTable,
                format!("Failed to read notes file {}: {}", path.display(), e),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Returns the notes in output order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Iterates the notes in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if the table has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Looks up a note by name.
    pub fn get(&self, name: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.name == name)
    }

    /// Validates every note and checks names are unique.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.notes.is_empty() {
            return Some("Note table is empty".to_string());
        }

        let mut seen = HashSet::new();
        for note in &self.notes {
            if let Some(reason) = note.validate() {
                return Some(reason);
            }
            if !seen.insert(note.name.as_str()) {
                return Some(format!("Duplicate note name '{}'", note.name));
            }
        }

        None
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        Self::piano_default()
    }
}

impl<'a> IntoIterator for &'a NoteTable {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
