/// Bias-corrected RMS of a sample window
///
/// The window mean, truncated to an integer, is taken as the DC offset of
/// the microphone and subtracted from every sample before the RMS is
/// computed. A constant window therefore has a magnitude of zero.
///
/// The window must not be empty. Release builds return 0 for an empty
/// window.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn magnitude(samples: &[u16]) -> f32 {
    debug_assert!(!samples.is_empty(), "sample window must not be empty");
    if samples.is_empty() {
        return 0.0;
    }

    let count = samples.len() as u64;
    let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
    let bias = (sum / count) as i64;

    let squares: u64 = samples
        .iter()
        .map(|&s| {
            let delta = i64::from(s) - bias;
            (delta * delta) as u64
        })
        .sum();

    libm::sqrtf((squares as f64 / count as f64) as f32)
}
