//! Piano-like tone synthesis.
//!
//! A tone is the sum of a fundamental sine and a quieter second harmonic,
//! shaped by [`symmetric_fade`] and peak-normalized to 16-bit PCM.

use std::f64::consts::TAU;

use crate::audio::MAX_SAMPLES;
use crate::config::GeneratorConfig;
use crate::error::{PianoError, Result};
use crate::synth::envelope::symmetric_fade;
use crate::synth::normalize::normalize_to_i16;
use crate::types::Note;

/// Weight of the second harmonic relative to the fundamental.
pub const HARMONIC_WEIGHT: f64 = 0.33;

/// Number of samples in a tone: `floor(sample_rate * duration_sec)`.
pub fn sample_count(sample_rate: u32, duration_sec: f64) -> usize {
    (f64::from(sample_rate) * duration_sec).floor() as usize
}

/// Evenly spaced time points over the half-open interval `[0, duration_sec)`.
pub fn time_points(duration_sec: f64, count: usize) -> impl Iterator<Item = f64> {
    let n = count as f64;
    (0..count).map(move |i| i as f64 * duration_sec / n)
}

/// Fundamental plus second harmonic at time `t`, before amplitude scaling.
pub fn harmonic_waveform(frequency: f64, t: f64) -> f64 {
    let fundamental = (TAU * frequency * t).sin();
    let overtone = (TAU * 2.0 * frequency * t).sin();
    fundamental + HARMONIC_WEIGHT * overtone
}

/// Checks the tone parameters and returns the sample count they produce.
fn validate_tone(
    frequency: f64,
    duration_sec: f64,
    sample_rate: u32,
    amplitude: f64,
) -> Result<usize> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(PianoError::invalid_argument(format!(
            "frequency must be > 0 Hz, got {}",
            frequency
        )));
    }

    if !duration_sec.is_finite() || duration_sec <= 0.0 {
        return Err(PianoError::invalid_argument(format!(
            "duration must be > 0 seconds, got {}",
            duration_sec
        )));
    }

    if sample_rate == 0 {
        return Err(PianoError::invalid_argument("sample rate must be > 0 Hz, got 0"));
    }

    if !(0.0..=1.0).contains(&amplitude) {
        return Err(PianoError::invalid_argument(format!(
            "amplitude must be between 0.0 and 1.0, got {}",
            amplitude
        )));
    }

    // Checked in f64 first: the usize cast saturates for huge durations.
    let exact = (f64::from(sample_rate) * duration_sec).floor();
    if exact < 1.0 {
        return Err(PianoError::invalid_argument(format!(
            "{}s at {} Hz produces no samples",
            duration_sec, sample_rate
        )));
    }

    if exact > MAX_SAMPLES as f64 {
        return Err(PianoError::invalid_argument(format!(
            "{}s at {} Hz needs {} samples, more than a WAV file holds ({})",
            duration_sec, sample_rate, exact, MAX_SAMPLES
        )));
    }

    Ok(sample_count(sample_rate, duration_sec))
}

/// Synthesizes one tone as a Sample Sequence.
///
/// # Arguments
///
/// * `frequency` - Fundamental frequency in Hz (> 0)
/// * `duration_sec` - Tone length in seconds (> 0)
/// * `sample_rate` - Samples per second (> 0)
/// * `amplitude` - Pre-normalization weight in 0.0-1.0; 0.0 yields silence
///
/// # Returns
///
/// `floor(sample_rate * duration_sec)` samples within `[-32767, 32767]`.
///
/// # Errors
///
/// Returns `INVALID_ARGUMENT` before any synthesis when a parameter is out of
/// range, or when the tone would not fit in one WAV file. Frequencies at or
/// above Nyquist are accepted and alias.
pub fn synthesize_tone(
    frequency: f64,
    duration_sec: f64,
    sample_rate: u32,
    amplitude: f64,
) -> Result<Vec<i16>> {
    let count = validate_tone(frequency, duration_sec, sample_rate, amplitude)?;

    if frequency >= f64::from(sample_rate) / 2.0 {
        log::debug!(
            "{} Hz is at or above Nyquist for {} Hz sampling and will alias",
            frequency,
            sample_rate
        );
    }

    let shaped: Vec<f64> = time_points(duration_sec, count)
        .map(|t| amplitude * harmonic_waveform(frequency, t) * symmetric_fade(t, duration_sec))
        .collect();

    Ok(normalize_to_i16(&shaped))
}

/// Synthesizes the tone for `note` using the rate, duration and amplitude of `config`.
pub fn synthesize_note(note: &Note, config: &GeneratorConfig) -> Result<Vec<i16>> {
    synthesize_tone(
        note.frequency,
        config.duration_sec,
        config.sample_rate,
        config.amplitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn sample_count_floors() {
        assert_eq!(sample_count(44100, 0.5), 22050);
        assert_eq!(sample_count(44100, 0.75), 33075);
        assert_eq!(sample_count(8000, 0.00001), 0);
        assert_eq!(sample_count(10, 0.25), 2);
    }

    #[test]
    fn time_points_are_half_open() {
        let points: Vec<f64> = time_points(0.5, 4).collect();
        assert_eq!(points, vec![0.0, 0.125, 0.25, 0.375]);
    }

    #[test]
    fn harmonic_waveform_starts_at_zero() {
        assert_eq!(harmonic_waveform(261.63, 0.0), 0.0);
    }

    #[test]
    fn harmonic_waveform_adds_weighted_overtone() {
        // Quarter period of 1 Hz: fundamental at 1, second harmonic at sin(pi) ~ 0
        let value = harmonic_waveform(1.0, 0.25);
        assert!((value - 1.0).abs() < 1e-9);

        // Eighth period: sin(pi/4) + 0.33 * sin(pi/2)
        let value = harmonic_waveform(1.0, 0.125);
        let expected = std::f64::consts::FRAC_1_SQRT_2 + HARMONIC_WEIGHT;
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn middle_c_has_expected_length() {
        let samples = synthesize_tone(261.63, 0.5, 44100, 0.95).unwrap();
        assert_eq!(samples.len(), 22050);
    }

    #[test]
    fn length_matches_floor_for_various_durations() {
        for &(duration, rate) in &[(0.1, 44100u32), (0.333, 22050), (1.25, 8000), (0.01, 48000)] {
            let samples = synthesize_tone(440.0, duration, rate, 0.5).unwrap();
            assert_eq!(samples.len(), sample_count(rate, duration));
        }
    }

    #[test]
    fn peak_reaches_full_scale_without_clipping() {
        for &frequency in &[261.63, 293.66, 329.63, 349.23] {
            let samples = synthesize_tone(frequency, 0.5, 44100, 0.95).unwrap();
            let max = samples.iter().map(|s| (*s as i32).abs()).max().unwrap();
            assert!(max <= 32767);
            assert!(max >= 32766, "peak {} for {} Hz", max, frequency);
            assert!(samples.iter().all(|&s| s != i16::MIN));
        }
    }

    #[test]
    fn first_sample_is_silent() {
        let samples = synthesize_tone(329.63, 0.5, 44100, 0.95).unwrap();
        assert_eq!(samples[0], 0);
    }

    #[test]
    fn zero_amplitude_is_silent() {
        let samples = synthesize_tone(261.63, 0.5, 44100, 0.0).unwrap();
        assert_eq!(samples.len(), 22050);
        assert!(samples.iter().all(|&s| s == 0));
    }

    #[test]
    fn amplitude_is_normalized_away() {
        let loud = synthesize_tone(293.66, 0.1, 44100, 0.95).unwrap();
        let quiet = synthesize_tone(293.66, 0.1, 44100, 0.1).unwrap();
        let diff = loud
            .iter()
            .zip(&quiet)
            .map(|(a, b)| (*a as i32 - *b as i32).abs())
            .max()
            .unwrap();
        assert!(diff <= 1);
    }

    #[test]
    fn synthesis_is_deterministic() {
        let a = synthesize_tone(349.23, 0.2, 44100, 0.95).unwrap();
        let b = synthesize_tone(349.23, 0.2, 44100, 0.95).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_non_positive_duration() {
        let err = synthesize_tone(261.63, 0.0, 44100, 0.95).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);

        let err = synthesize_tone(261.63, -0.5, 44100, 0.95).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);

        let err = synthesize_tone(261.63, f64::NAN, 44100, 0.95).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let err = synthesize_tone(261.63, 0.5, 0, 0.95).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn rejects_non_positive_frequency() {
        for &frequency in &[0.0, -261.63, f64::INFINITY, f64::NAN] {
            let err = synthesize_tone(frequency, 0.5, 44100, 0.95).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidArgument);
        }
    }

    #[test]
    fn rejects_amplitude_out_of_range() {
        for &amplitude in &[-0.1, 1.5, f64::NAN] {
            let err = synthesize_tone(261.63, 0.5, 44100, amplitude).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidArgument);
        }
    }

    #[test]
    fn rejects_duration_shorter_than_one_sample() {
        let err = synthesize_tone(261.63, 1e-6, 44100, 0.95).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(err.message.contains("no samples"));
    }

    #[test]
    fn rejects_duration_longer_than_a_wav_file() {
        let err = synthesize_tone(440.0, 1e20, 44100, 0.5).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(err.message.contains("WAV"));

        let err = synthesize_tone(440.0, 1e6, 44100, 0.5).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn tiny_amplitude_still_reaches_full_scale() {
        for &amplitude in &[1e-11, 1e-300] {
            let samples = synthesize_tone(440.0, 0.1, 44100, amplitude).unwrap();
            let max = samples.iter().map(|s| (*s as i32).abs()).max().unwrap();
            assert!(max >= 32766, "peak {} for amplitude {:e}", max, amplitude);
        }
    }

    #[test]
    fn frequency_above_nyquist_still_synthesizes() {
        let samples = synthesize_tone(30000.0, 0.01, 44100, 0.95).unwrap();
        assert_eq!(samples.len(), 441);
    }

    #[test]
    fn synthesize_note_uses_config() {
        let config = GeneratorConfig {
            sample_rate: 8000,
            duration_sec: 0.25,
            ..GeneratorConfig::default()
        };
        let note = Note::new("a4", 440.0);
        let samples = synthesize_note(&note, &config).unwrap();
        assert_eq!(samples.len(), 2000);
    }
}
