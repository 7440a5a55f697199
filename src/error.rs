//! Error types for piano-notes.
//!
//! Defines the error codes and the error type shared by the synthesizer,
//! the WAV writer and the generation driver.

use std::fmt;

/// Error codes identifying the class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A synthesis or configuration parameter is out of range.
    /// Trigger: non-positive duration, sample rate or frequency, NaN values,
    /// amplitude outside 0.0-1.0, or a sequence that would be empty.
    InvalidArgument,

    /// The note table cannot be used.
    /// Trigger: empty table, duplicate or unsafe note names, malformed notes file.
    InvalidNoteTable,

    /// Writing a WAV file failed.
    /// Trigger: missing directory, permission denied, disk full.
    WavWriteFailed,

    /// Reading a WAV file back failed.
    /// Trigger: missing file, not a WAV container, unexpected sample format.
    WavReadFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::InvalidNoteTable => "INVALID_NOTE_TABLE",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::WavReadFailed => "WAV_READ_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "A synthesis parameter is out of range",
            ErrorCode::InvalidNoteTable => "The note table is empty or malformed",
            ErrorCode::WavWriteFailed => "Failed to write the WAV file",
            ErrorCode::WavReadFailed => "Failed to read the WAV file",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => {
                "Use a positive duration and sample rate, frequencies above 0 Hz \
                 and an amplitude between 0.0 and 1.0"
            }
            ErrorCode::InvalidNoteTable => {
                "Give each note a unique name made of letters, digits, '#', '_' or '-' \
                 and a positive frequency (e.g., --note c=261.63 or --note C4)"
            }
            ErrorCode::WavWriteFailed => {
                "Check that the output directory exists, is writable and has free space"
            }
            ErrorCode::WavReadFailed => {
                "Check that the file exists and is a mono 16-bit PCM WAV file"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generation operations.
#[derive(Debug)]
pub struct PianoError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PianoError {
    /// Creates a new PianoError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new PianoError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_ARGUMENT error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, reason)
    }

    /// Creates an INVALID_NOTE_TABLE error.
    pub fn invalid_note_table(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidNoteTable,
            format!("Invalid note table: {}", reason.into()),
        )
    }

    /// Creates a WAV_WRITE_FAILED error wrapping the underlying cause.
    pub fn wav_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let path = path.into();
        let message = format!("Failed to write {}: {}", path, source);
        Self::with_source(ErrorCode::WavWriteFailed, message, source)
    }

    /// Creates a WAV_READ_FAILED error.
    pub fn wav_read_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::WavReadFailed,
            format!("Failed to read {}: {}", path.into(), reason.into()),
        )
    }
}

impl fmt::Display for PianoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for PianoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using PianoError.
pub type Result<T> = std::result::Result<T, PianoError>;
