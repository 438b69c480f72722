use heapless::Vec;

use super::{
    Button, CommandRecord, MAX_RECORD_LEN, RECORD_START, TYPE_BUTTON, TYPE_COLOR, checksum,
    pressed_from_wire, record_len,
};
use crate::color::Rgb;

/// Why a framed record was discarded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Type byte is not part of the protocol
    UnknownType(u8),
    /// Known record the engine does not act on (sensor data)
    Unsupported(u8),
    /// Checksum byte does not match
    Checksum,
    /// Payload has invalid values
    Malformed,
}

/// Result of feeding a byte that completed or broke a record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeEvent {
    Record(CommandRecord),
    Dropped(DropReason),
}

/// Incremental record decoder
///
/// Bytes are fed one at a time, so a record split across several reads is
/// reassembled. Bytes outside a record are skipped until the next start
/// byte.
#[derive(Debug, Default)]
pub struct PacketDecoder {
    buffer: Vec<u8, MAX_RECORD_LEN>,
    expected: usize,
}

impl PacketDecoder {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            expected: 0,
        }
    }

    /// Feed one byte
    ///
    /// Returns `None` while no record is complete.
    pub fn push(&mut self, byte: u8) -> Option<DecodeEvent> {
        match self.buffer.len() {
            0 => {
                if byte == RECORD_START {
                    let _ = self.buffer.push(byte);
                }
                None
            }
            1 => {
                let Some(len) = record_len(byte) else {
                    self.buffer.clear();
                    // A repeated start byte may begin the real record
                    if byte == RECORD_START {
                        let _ = self.buffer.push(byte);
                    }
                    return Some(DecodeEvent::Dropped(DropReason::UnknownType(byte)));
                };
                self.expected = len;
                let _ = self.buffer.push(byte);
                None
            }
            _ => {
                let _ = self.buffer.push(byte);
                if self.buffer.len() < self.expected {
                    return None;
                }
                let event = Self::parse(&self.buffer);
                self.buffer.clear();
                self.expected = 0;
                Some(event)
            }
        }
    }

    /// Parse a complete record (start byte included)
    fn parse(record: &[u8]) -> DecodeEvent {
        let (body, check) = record.split_at(record.len() - 1);
        if checksum(body) != check[0] {
            return DecodeEvent::Dropped(DropReason::Checksum);
        }

        match body[1] {
            TYPE_COLOR => DecodeEvent::Record(CommandRecord::Color(Rgb {
                r: body[2],
                g: body[3],
                b: body[4],
            })),
            TYPE_BUTTON => match (Button::from_wire(body[2]), pressed_from_wire(body[3])) {
                (Some(button), Some(pressed)) => {
                    DecodeEvent::Record(CommandRecord::Button { button, pressed })
                }
                _ => DecodeEvent::Dropped(DropReason::Malformed),
            },
            kind => DecodeEvent::Dropped(DropReason::Unsupported(kind)),
        }
    }
}
