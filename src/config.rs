//! Startup configuration
//!
//! Everything here is fixed for the lifetime of the engine.

use crate::{color::Rgb, effect::EffectId, pacer::PacingPolicy};

/// Audio meter tuning
#[derive(Debug, Clone)]
pub struct MeterConfig {
    /// Margin added to the measured quiet RMS to form the floor
    pub floor_offset: f32,
    /// Distance between floor and ceiling.
    /// Lower values light more pixels for the same loudness.
    pub sensitivity: f32,
    /// Perceptual curve; the normalized level is raised to `10^(-curve / 10)`
    pub curve: f32,
    /// Color of the peak-hold pixel
    pub peak_color: Rgb,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            floor_offset: 10.0,
            sensitivity: 500.0,
            curve: 2.0,
            peak_color: Rgb {
                r: 100,
                g: 0,
                b: 255,
            },
        }
    }
}

/// Configuration for the engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Effect shown after startup
    pub effect: EffectId,
    /// Initial user color
    pub color: Rgb,
    /// Initial scanner speed
    pub speed: f32,
    /// Output brightness applied when flushing (0-255)
    pub brightness: u8,
    pub pacing: PacingPolicy,
    pub meter: MeterConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            effect: EffectId::AudioMeter,
            color: Rgb { r: 127, g: 0, b: 0 },
            speed: 5.0,
            // 10% of full scale
            brightness: 26,
            pacing: PacingPolicy::default(),
            meter: MeterConfig::default(),
        }
    }
}
