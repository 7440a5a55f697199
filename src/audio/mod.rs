//! Audio output module.
//!
//! Provides WAV file writing (and read-back) for synthesized notes.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    expected_file_len, pcm16_spec, read_wav, samples_to_duration, write_wav, write_wav_to_buffer,
    WavContents, BITS_PER_SAMPLE, CHANNELS, HEADER_LEN, MAX_SAMPLES,
};
