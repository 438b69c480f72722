//! Frame pacing
//!
//! Effects report how long each frame should stay on the strip; the pacer
//! performs that wait on a blocking [`DelayNs`] implementation.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

/// Granularity of interruptible holds
pub const HOLD_SLICE: Duration = Duration::from_millis(1);

/// How frame holds and multi-frame effects interact with remote input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PacingPolicy {
    /// Holds always run to completion and the rainbow plays its full cycle
    /// in one loop iteration. Commands wait until the burst is over.
    Faithful,
    /// One frame per loop iteration; holds end early once input is waiting.
    #[default]
    Responsive,
}

/// Blocking frame pacer
pub struct Pacer<D: DelayNs> {
    delay: D,
    policy: PacingPolicy,
}

impl<D: DelayNs> Pacer<D> {
    pub const fn new(delay: D, policy: PacingPolicy) -> Self {
        Self { delay, policy }
    }

    pub const fn policy(&self) -> PacingPolicy {
        self.policy
    }

    /// Wait for `duration`
    ///
    /// Under [`PacingPolicy::Responsive`] the wait is split into
    /// [`HOLD_SLICE`] steps and `interrupted` is polled before each one.
    /// Returns `false` if the hold was cut short.
    pub fn hold(&mut self, duration: Duration, mut interrupted: impl FnMut() -> bool) -> bool {
        let mut remaining = duration.as_micros();
        if remaining == 0 {
            return true;
        }

        match self.policy {
            PacingPolicy::Faithful => {
                while remaining > 0 {
                    let step = remaining.min(u64::from(u32::MAX));
                    self.delay.delay_us(u32::try_from(step).unwrap_or(u32::MAX));
                    remaining -= step;
                }
                true
            }
            PacingPolicy::Responsive => {
                let slice = HOLD_SLICE.as_micros();
                while remaining > 0 {
                    if interrupted() {
                        return false;
                    }
                    let step = remaining.min(slice);
                    self.delay.delay_us(u32::try_from(step).unwrap_or(u32::MAX));
                    remaining -= step;
                }
                true
            }
        }
    }
}
