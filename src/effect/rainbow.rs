//! Rainbow cycling effect
//!
//! Spreads the full color wheel across the strip and rotates it by one
//! wheel position per frame. One cycle is 256 frames.

use embassy_time::Duration;

use super::{Effect, Frame, RenderContext};
use crate::color::{Rgb, wheel};

/// Hold between two rainbow steps
pub const RAINBOW_STEP_HOLD: Duration = Duration::from_millis(1);

/// Rainbow effect driven by the classic color wheel
#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    /// Wheel offset of the next frame
    phase: u8,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u8 {
        self.phase
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, _ctx: &RenderContext<'_>, leds: &mut [Rgb]) -> Frame {
        let pixels = leds.len().max(1);
        for (i, led) in leds.iter_mut().enumerate() {
            let offset = (i * 256 / pixels) + usize::from(self.phase);
            *led = wheel((offset & 0xFF) as u8);
        }

        self.phase = self.phase.wrapping_add(1);
        Frame {
            hold: RAINBOW_STEP_HOLD,
            ends_cycle: self.phase == 0,
        }
    }
}
