//! Effect system with compile-time known effect variants
//!
//! Every effect keeps its own state in the [`EffectRegistry`], so switching
//! away from an effect and back resumes its animation where it stopped.

mod audio_meter;
mod rainbow;
mod scanner;
mod solid;

pub use audio_meter::{AudioMeterEffect, volume_color};
pub use rainbow::{RAINBOW_STEP_HOLD, RainbowEffect};
pub use scanner::{ScanDirection, ScannerEffect, scanner_hold};
pub use solid::SolidEffect;

use embassy_time::Duration;

use crate::{audio::AudioCalibration, color::Rgb, config::MeterConfig, params::UserParameters};

const EFFECT_NAME_AUDIO_METER: &str = "audio_meter";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_SCANNER: &str = "scanner";
const EFFECT_NAME_SOLID: &str = "solid";

/// Inputs shared by all effects for one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Remote-controlled parameters
    pub params: &'a UserParameters,
    /// Latest audio window. Only refreshed while the audio meter is active.
    pub samples: &'a [u16],
}

/// Timing of a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// How long the frame stays on the strip before the next step
    pub hold: Duration,
    /// Whether the effect finished an animation cycle with this frame
    pub ends_cycle: bool,
}

impl Frame {
    /// Frame with no hold that closes its cycle
    pub const IMMEDIATE: Self = Self {
        hold: Duration::from_ticks(0),
        ends_cycle: true,
    };

    /// Single-frame cycle held for `hold`
    pub const fn held(hold: Duration) -> Self {
        Self {
            hold,
            ends_cycle: true,
        }
    }
}

pub trait Effect {
    /// Render a single frame into `leds`
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) -> Frame;

    /// Called once the frame has been shown and held
    fn finish_frame(&mut self, _leds: &mut [Rgb]) {}
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectId {
    #[default]
    AudioMeter,
    Rainbow,
    Scanner,
    Solid,
}

impl EffectId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AudioMeter => EFFECT_NAME_AUDIO_METER,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Scanner => EFFECT_NAME_SCANNER,
            Self::Solid => EFFECT_NAME_SOLID,
        }
    }
}

/// Owns the persistent state of every effect
///
/// Effects are never reset on switch; leftover pixels from the previous
/// effect stay on the strip until the new one overwrites them.
#[derive(Debug, Clone)]
pub struct EffectRegistry {
    pub meter: AudioMeterEffect,
    pub rainbow: RainbowEffect,
    pub scanner: ScannerEffect,
    pub solid: SolidEffect,
}

impl EffectRegistry {
    pub fn new(calibration: AudioCalibration, meter: &MeterConfig) -> Self {
        Self {
            meter: AudioMeterEffect::new(calibration, meter),
            rainbow: RainbowEffect::new(),
            scanner: ScannerEffect::new(),
            solid: SolidEffect,
        }
    }

    /// Render one frame of the selected effect
    pub fn render(&mut self, id: EffectId, ctx: &RenderContext<'_>, leds: &mut [Rgb]) -> Frame {
        match id {
            EffectId::AudioMeter => self.meter.render(ctx, leds),
            EffectId::Rainbow => self.rainbow.render(ctx, leds),
            EffectId::Scanner => self.scanner.render(ctx, leds),
            EffectId::Solid => self.solid.render(ctx, leds),
        }
    }

    /// Finish the frame previously rendered by the selected effect
    pub fn finish_frame(&mut self, id: EffectId, leds: &mut [Rgb]) {
        match id {
            EffectId::AudioMeter => self.meter.finish_frame(leds),
            EffectId::Rainbow => self.rainbow.finish_frame(leds),
            EffectId::Scanner => self.scanner.finish_frame(leds),
            EffectId::Solid => self.solid.finish_frame(leds),
        }
    }
}
