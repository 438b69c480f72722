//! Audio level pipeline
//!
//! Raw microphone windows are reduced to a bias-corrected RMS magnitude,
//! which is then mapped onto a pixel count through a calibrated,
//! perceptually curved scale.

mod level;
mod stats;

pub use level::{AudioCalibration, PeakState, pixel_level, scale_exponent};
pub use stats::magnitude;

/// Number of samples captured per audio window
pub const SAMPLE_WINDOW: usize = 160;

/// Blocking audio capture peripheral
///
/// Implement this trait for the platform microphone (PDM, I2S, ADC...).
pub trait SampleSource {
    type Error;

    /// Fill the whole buffer with fresh samples, blocking until done
    fn fill(&mut self, buffer: &mut [u16]) -> Result<(), Self::Error>;
}
