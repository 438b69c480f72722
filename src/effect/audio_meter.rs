//! Sound-reactive level meter
//!
//! Lights a bar proportional to the loudness of the latest audio window and
//! keeps a slowly falling peak-hold pixel above it.

use super::{Effect, Frame, RenderContext};
use crate::{
    audio::{AudioCalibration, PeakState, magnitude, pixel_level},
    color::{BLACK, Rgb},
    config::MeterConfig,
};

/// Bar color for the pixel at `index` on a strip of `pixels`
///
/// Red stays fixed while green ramps up along the strip.
pub fn volume_color(index: usize, pixels: usize) -> Rgb {
    let step = 255 / pixels.max(1);
    let green = u8::try_from(index.saturating_mul(step)).unwrap_or(u8::MAX);
    Rgb {
        r: 200,
        g: green,
        b: 0,
    }
}

/// Audio level meter with peak hold
#[derive(Debug, Clone)]
pub struct AudioMeterEffect {
    calibration: AudioCalibration,
    curve: f32,
    peak_color: Rgb,
    peak: PeakState,
    level: f32,
}

impl AudioMeterEffect {
    pub fn new(calibration: AudioCalibration, config: &MeterConfig) -> Self {
        Self {
            calibration,
            curve: config.curve,
            peak_color: config.peak_color,
            peak: PeakState::new(),
            level: 0.0,
        }
    }

    pub const fn calibration(&self) -> AudioCalibration {
        self.calibration
    }

    /// Level computed for the last rendered frame, in pixels
    pub const fn level(&self) -> f32 {
        self.level
    }

    pub const fn peak(&self) -> &PeakState {
        &self.peak
    }
}

impl Effect for AudioMeterEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) -> Frame {
        let pixels = leds.len();
        if pixels == 0 || ctx.samples.is_empty() {
            return Frame::IMMEDIATE;
        }

        self.level = pixel_level(magnitude(ctx.samples), self.calibration, self.curve, pixels);

        leds.fill(BLACK);
        let lit = (self.level as usize).min(pixels);
        for (i, led) in leds.iter_mut().enumerate().take(lit) {
            *led = volume_color(i, pixels);
        }

        self.peak.update(self.level, pixels);
        if let Some(led) = self.peak.pixel().and_then(|i| leds.get_mut(i)) {
            *led = self.peak_color;
        }

        // Paced by the capture itself
        Frame::IMMEDIATE
    }
}
