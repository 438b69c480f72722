//! Larsen scanner effect
//!
//! A five pixel wide eye in the user color sweeps along the strip and
//! bounces off both ends. Faster speed settings shorten the hold of every
//! frame.

use embassy_time::Duration;

use super::{Effect, Frame, RenderContext};
use crate::{
    color::{BLACK, Rgb, dim},
    params::SPEED_MAX,
};

/// Hold at the fastest speed
const FASTEST_HOLD_US: f32 = 10_000.0;
/// Hold at speed zero
const SLOWEST_HOLD_US: f32 = 300_000.0;

/// Eye brightness divisors, indexed by distance from the center
const FALLOFF: [u8; 3] = [1, 2, 8];

/// Hold for one scanner frame at the given speed
///
/// The line runs from 300 ms at speed 0 to 10 ms at speed 10. Speed is
/// kept within 1..=10, so the slowest reachable hold is 271 ms at speed 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scanner_hold(speed: f32) -> Duration {
    let slowdown = (SPEED_MAX - speed) / SPEED_MAX;
    let micros = FASTEST_HOLD_US + (SLOWEST_HOLD_US - FASTEST_HOLD_US) * slowdown;
    Duration::from_micros(micros.max(0.0) as u64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

impl ScanDirection {
    const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Bouncing scanner state
#[derive(Debug, Clone)]
pub struct ScannerEffect {
    position: usize,
    direction: ScanDirection,
}

impl Default for ScannerEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl ScannerEffect {
    pub const fn new() -> Self {
        Self {
            position: 0,
            direction: ScanDirection::Forward,
        }
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn direction(&self) -> ScanDirection {
        self.direction
    }

    /// Write `color` to the eye span, dimmed by distance from the center
    fn paint(&self, leds: &mut [Rgb], color: Option<Rgb>) {
        for offset in -2isize..=2 {
            let Some(index) = self.position.checked_add_signed(offset) else {
                continue;
            };
            let Some(led) = leds.get_mut(index) else {
                continue;
            };
            *led = match color {
                Some(color) => dim(color, FALLOFF[offset.unsigned_abs()]),
                None => BLACK,
            };
        }
    }

    /// Move one pixel and bounce off the ends of a strip of `pixels`
    fn advance(&mut self, pixels: usize) {
        if pixels < 2 {
            self.position = 0;
            return;
        }
        let last = pixels - 1;

        match self.direction {
            ScanDirection::Forward => {
                self.position += 1;
                if self.position >= last {
                    self.position = last - 1;
                    self.direction = self.direction.reversed();
                }
            }
            ScanDirection::Backward => {
                if self.position == 0 {
                    self.position = 1;
                    self.direction = self.direction.reversed();
                } else {
                    self.position -= 1;
                }
            }
        }
    }
}

impl Effect for ScannerEffect {
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) -> Frame {
        if leds.is_empty() {
            return Frame::IMMEDIATE;
        }
        self.position = self.position.min(leds.len() - 1);

        self.paint(leds, Some(ctx.params.color));
        Frame::held(scanner_hold(ctx.params.speed()))
    }

    fn finish_frame(&mut self, leds: &mut [Rgb]) {
        self.paint(leds, None);
        self.advance(leds.len());
    }
}
