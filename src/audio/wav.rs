//! WAV file writer for synthesized notes.
//!
//! Writes mono 16-bit PCM using the hound crate, and reads it back for
//! verification.

use std::io::{Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{ErrorCode, PianoError, Result};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (16-bit signed PCM).
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size of the canonical RIFF/WAVE PCM header in bytes.
pub const HEADER_LEN: u64 = 44;

/// Most samples a single file can hold.
///
/// The RIFF chunk size is a u32 covering everything after its first 8 bytes.
pub const MAX_SAMPLES: usize = ((u32::MAX - (HEADER_LEN as u32 - 8)) / 2) as usize;

/// Returns the WAV spec used for every generated file.
pub fn pcm16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Samples and format read back from a WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavContents {
    /// Frame rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Decoded samples in file order.
    pub samples: Vec<i16>,
}

/// Rejects sequences too long for the 32-bit size fields of a WAV header.
fn check_sample_count(count: usize, target: &str) -> Result<()> {
    if count > MAX_SAMPLES {
        return Err(PianoError::new(
            ErrorCode::WavWriteFailed,
            format!(
                "Failed to write {}: {} samples exceeds the WAV limit of {}",
                target, count, MAX_SAMPLES
            ),
        ));
    }
    Ok(())
}

/// Writes all samples through `writer`, then finalizes the header.
///
/// On error the writer is dropped, which closes the underlying handle.
fn write_samples<W>(mut writer: WavWriter<W>, samples: &[i16]) -> hound::Result<()>
where
    W: Write + Seek,
{
    let mut frames = writer.get_i16_writer(samples.len() as u32);
    for &sample in samples {
        frames.write_sample(sample);
    }
    frames.flush()?;
    writer.finalize()
}

/// Writes samples to a mono 16-bit WAV file.
///
/// An existing file at `path` is truncated and replaced.
///
/// # Arguments
///
/// * `samples` - Sample Sequence in playback order
/// * `path` - Output file path
/// * `sample_rate` - Frame rate in Hz (44100 for the default table)
///
/// # Example
///
/// ```ignore
/// use piano_notes::audio::write_wav;
///
/// let samples = vec![0i16, 16383, -16383, 0];
/// write_wav(&samples, Path::new("/tmp/test.wav"), 44100)?;
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    let display = path.display().to_string();
    check_sample_count(samples.len(), &display)?;

    let writer = WavWriter::create(path, pcm16_spec(sample_rate))
        .map_err(|e| PianoError::wav_write_failed(display.clone(), e))?;

    write_samples(writer, samples).map_err(|e| PianoError::wav_write_failed(display, e))
}

/// Writes samples to an in-memory WAV buffer.
///
/// Returns the WAV file contents as a byte vector.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    check_sample_count(samples.len(), "<memory>")?;
    let mut cursor = std::io::Cursor::new(Vec::new());

    {
        let writer = WavWriter::new(&mut cursor, pcm16_spec(sample_rate))
            .map_err(|e| PianoError::wav_write_failed("<memory>", e))?;
        write_samples(writer, samples)
            .map_err(|e| PianoError::wav_write_failed("<memory>", e))?;
    }

    Ok(cursor.into_inner())
}

/// Reads a mono 16-bit WAV file back into samples.
pub fn read_wav(path: &Path) -> Result<WavContents> {
    let display = path.display().to_string();

    let mut reader = WavReader::open(path)
        .map_err(|e| PianoError::wav_read_failed(display.clone(), e.to_string()))?;

    let spec = reader.spec();
    if spec.channels != CHANNELS
        || spec.bits_per_sample != BITS_PER_SAMPLE
        || spec.sample_format != SampleFormat::Int
    {
        return Err(PianoError::wav_read_failed(
            display,
            format!(
                "expected mono 16-bit PCM, found {} channel(s) at {} bits ({:?})",
                spec.channels, spec.bits_per_sample, spec.sample_format
            ),
        ));
    }

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| PianoError::wav_read_failed(display, e.to_string()))?;

    Ok(WavContents {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        samples,
    })
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f64 {
    sample_count as f64 / f64::from(sample_rate)
}

/// Expected on-disk size of a mono 16-bit file holding `sample_count` samples.
pub fn expected_file_len(sample_count: usize) -> u64 {
    HEADER_LEN + sample_count as u64 * u64::from(BITS_PER_SAMPLE / 8)
}
