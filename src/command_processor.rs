//! Command processing module
//!
//! Pulls remote records off the transport and applies them to the user
//! parameters.

use log::{debug, info};

use crate::effect::EffectId;
use crate::params::UserParameters;
use crate::protocol::{Button, CommandRecord, DecodeEvent, PacketDecoder};
use crate::transport::Transport;

/// Counters for received records
///
/// Dropped records are otherwise silent; these counters are the only trace
/// they leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtocolStats {
    /// Records decoded successfully
    pub decoded: u32,
    /// Framed records discarded as malformed, unknown or unsupported
    pub dropped: u32,
}

/// Decodes remote records and turns them into parameter changes
#[derive(Debug, Default)]
pub struct CommandProcessor {
    decoder: PacketDecoder,
    stats: ProtocolStats,
}

impl CommandProcessor {
    pub const fn new() -> Self {
        Self {
            decoder: PacketDecoder::new(),
            stats: ProtocolStats {
                decoded: 0,
                dropped: 0,
            },
        }
    }

    pub const fn stats(&self) -> ProtocolStats {
        self.stats
    }

    /// Read waiting bytes until one record is complete (non-blocking)
    ///
    /// Returns `Ok(None)` when the waiting bytes do not finish a record; a
    /// partial record is kept for the next call.
    pub fn decode_next<T: Transport>(
        &mut self,
        transport: &mut T,
    ) -> Result<Option<CommandRecord>, T::Error> {
        while transport.bytes_waiting() {
            let Some(byte) = transport.read_byte()? else {
                break;
            };
            match self.decoder.push(byte) {
                Some(DecodeEvent::Record(record)) => {
                    self.stats.decoded = self.stats.decoded.saturating_add(1);
                    return Ok(Some(record));
                }
                Some(DecodeEvent::Dropped(_)) => {
                    self.stats.dropped = self.stats.dropped.saturating_add(1);
                }
                None => {}
            }
        }
        Ok(None)
    }

    /// Apply a record to the parameters
    pub fn apply(params: &mut UserParameters, record: CommandRecord) {
        match record {
            CommandRecord::Color(color) => {
                info!("color set to ({}, {}, {})", color.r, color.g, color.b);
                params.color = color;
            }
            CommandRecord::Button {
                button,
                pressed: true,
            } => Self::apply_button(params, button),
            CommandRecord::Button { pressed: false, .. } => {
                // Releases carry no action
            }
        }
    }

    fn apply_button(params: &mut UserParameters, button: Button) {
        let effect = match button {
            Button::Up => {
                let speed = params.change_speed(1.0);
                info!("speed set to {}", speed);
                return;
            }
            Button::Down => {
                let speed = params.change_speed(-1.0);
                info!("speed set to {}", speed);
                return;
            }
            Button::Button1 => EffectId::AudioMeter,
            Button::Button2 => EffectId::Rainbow,
            Button::Button3 => EffectId::Scanner,
            Button::Button4 => EffectId::Solid,
            Button::Left | Button::Right => {
                debug!("ignoring {:?} button", button);
                return;
            }
        };

        if params.effect != effect {
            info!("switching effect to {}", effect.as_str());
        }
        params.effect = effect;
    }
}
