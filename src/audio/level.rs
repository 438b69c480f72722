use crate::audio::magnitude;

/// Quiet floor and loud ceiling of the magnitude scale
///
/// Measured once at startup and never updated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioCalibration {
    pub floor: f32,
    pub ceiling: f32,
}

impl AudioCalibration {
    pub const fn new(floor: f32, ceiling: f32) -> Self {
        Self { floor, ceiling }
    }

    /// Calibrate from a window recorded while the room is assumed quiet
    ///
    /// # Arguments
    /// * `samples` - Quiet window
    /// * `floor_offset` - Margin added above the measured noise
    /// * `sensitivity` - Distance from floor to ceiling; lower lights more
    ///   pixels for the same loudness
    pub fn from_quiet_window(samples: &[u16], floor_offset: f32, sensitivity: f32) -> Self {
        let floor = magnitude(samples) + floor_offset;
        Self::new(floor, floor + sensitivity)
    }

    /// Normalize a magnitude into 0.0..=1.0, clamping outside the range
    fn normalize(self, magnitude: f32) -> f32 {
        let span = self.ceiling - self.floor;
        if span <= 0.0 {
            return if magnitude >= self.ceiling { 1.0 } else { 0.0 };
        }
        (magnitude.clamp(self.floor, self.ceiling) - self.floor) / span
    }
}

/// Exponent applied to the normalized level for a given curve value
///
/// Curves above zero expand the low and mid range visually.
pub fn scale_exponent(curve: f32) -> f32 {
    libm::powf(10.0, curve * -0.1)
}

/// Map a magnitude to a fractional count of lit pixels in `0.0..=pixels`
#[allow(clippy::cast_precision_loss)]
pub fn pixel_level(magnitude: f32, calibration: AudioCalibration, curve: f32, pixels: usize) -> f32 {
    let normalized = calibration.normalize(magnitude);
    libm::powf(normalized, scale_exponent(curve)) * pixels as f32
}

/// Peak-hold indicator position, in pixel units
///
/// Jumps up to a louder level instantly and falls back by one pixel per
/// frame otherwise. The fall rate is tied to the frame rate, not to time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeakState {
    peak: f32,
}

impl PeakState {
    pub const fn new() -> Self {
        Self { peak: 0.0 }
    }

    pub const fn peak(&self) -> f32 {
        self.peak
    }

    /// Advance one frame with the current level
    #[allow(clippy::cast_precision_loss)]
    pub fn update(&mut self, level: f32, pixels: usize) {
        if level >= self.peak {
            let top = pixels.saturating_sub(1) as f32;
            self.peak = level.min(top);
        } else if self.peak > 0.0 {
            self.peak = (self.peak - 1.0).max(0.0);
        }
    }

    /// Index of the peak pixel, if the indicator should be drawn
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel(&self) -> Option<usize> {
        if self.peak > 0.0 {
            Some(self.peak as usize)
        } else {
            None
        }
    }
}
