//! Tone synthesis.
//!
//! Builds the Sample Sequence for one note in three stages:
//! - [`tone`]: time points and the fundamental + second harmonic waveform
//! - [`envelope`]: the symmetric exponential fade applied to the waveform
//! - [`normalize`]: peak normalization to the signed 16-bit range

pub mod envelope;
pub mod normalize;
pub mod tone;

// Re-export commonly used items
pub use envelope::symmetric_fade;
pub use normalize::{normalize_to_i16, peak, FULL_SCALE};
pub use tone::{
    harmonic_waveform, sample_count, synthesize_note, synthesize_tone, time_points,
    HARMONIC_WEIGHT,
};
