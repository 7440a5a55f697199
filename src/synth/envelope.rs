//! Amplitude envelope for synthesized tones.

/// Decay rate used by both exponential terms of the fade.
pub const FADE_RATE: f64 = 4.0;

/// Symmetric exponential fade evaluated at time `t` of a note lasting
/// `duration_sec` seconds.
///
/// ```text
/// envelope(t) = exp(-4t / d) * exp(-4(d - t) / d)
/// ```
///
/// The two exponents sum to `-4` for every `t`, so the product equals
/// `exp(-4)` (about 0.018) across the whole note. It is a uniform attenuation
/// and the later peak normalization scales it back out.
pub fn symmetric_fade(t: f64, duration_sec: f64) -> f64 {
    let onset = (-FADE_RATE * t / duration_sec).exp();
    let tail = (-FADE_RATE * (duration_sec - t) / duration_sec).exp();
    onset * tail
}
