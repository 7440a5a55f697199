//! Peak normalization into the 16-bit PCM range.

/// Largest magnitude emitted by normalization.
///
/// Symmetric around zero, so `-32768` is never produced.
pub const FULL_SCALE: i16 = i16::MAX;

/// Returns the largest absolute value in `samples`, or 0.0 when empty.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0f64, f64::max)
}

/// Scales `samples` so the peak maps to [`FULL_SCALE`] and converts to i16.
///
/// Values are truncated toward zero. Any non-zero finite peak reaches full
/// scale, however small. A zero or non-finite peak yields an all-zero buffer
/// of the same length instead of dividing by it.
pub fn normalize_to_i16(samples: &[f64]) -> Vec<i16> {
    let peak = peak(samples);
    if peak == 0.0 || !peak.is_finite() {
        log::debug!(
            "Peak {:e} cannot be normalized, emitting {} zero samples",
            peak,
            samples.len()
        );
        return vec![0; samples.len()];
    }

    // Divide before scaling: `FULL_SCALE / peak` overflows for peaks near f64::MIN_POSITIVE.
    let full_scale = f64::from(FULL_SCALE);
    samples
        .iter()
        .map(|&s| (s / peak * full_scale).clamp(-full_scale, full_scale) as i16)
        .collect()
}
