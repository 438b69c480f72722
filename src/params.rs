use crate::{color::Rgb, effect::EffectId};

/// Slowest scanner speed setting
pub const SPEED_MIN: f32 = 1.0;
/// Fastest scanner speed setting
pub const SPEED_MAX: f32 = 10.0;

/// Parameters the remote controls
///
/// Written only by the command processor, read by the effects on the next
/// frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UserParameters {
    /// Active effect
    pub effect: EffectId,
    /// Color used by the solid and scanner effects
    pub color: Rgb,
    /// Always within `SPEED_MIN..=SPEED_MAX`
    speed: f32,
}

impl UserParameters {
    pub fn new(effect: EffectId, color: Rgb, speed: f32) -> Self {
        Self {
            effect,
            color,
            speed: clamp_speed(speed),
        }
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Change speed by `delta`, saturating at the bounds
    ///
    /// Returns the new speed.
    pub fn change_speed(&mut self, delta: f32) -> f32 {
        self.speed = clamp_speed(self.speed + delta);
        self.speed
    }
}

fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        return SPEED_MIN;
    }
    speed.clamp(SPEED_MIN, SPEED_MAX)
}
