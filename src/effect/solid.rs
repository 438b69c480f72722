//! Solid color fill effect

use super::{Effect, Frame, RenderContext};
use crate::color::Rgb;

/// Fills all LEDs with the user color
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn render(&mut self, ctx: &RenderContext<'_>, leds: &mut [Rgb]) -> Frame {
        leds.fill(ctx.params.color);
        Frame::IMMEDIATE
    }
}
