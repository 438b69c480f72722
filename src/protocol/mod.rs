//! Remote control wire protocol
//!
//! Records use the Bluefruit Connect framing: a `'!'` start byte, a type
//! byte, the payload and a checksum byte holding the bitwise NOT of the sum
//! of everything before it.

mod decoder;

use heapless::Vec;

pub use decoder::{DecodeEvent, DropReason, PacketDecoder};

use crate::color::Rgb;

/// Start of every record
pub const RECORD_START: u8 = b'!';

pub(crate) const TYPE_COLOR: u8 = b'C';
pub(crate) const TYPE_BUTTON: u8 = b'B';
pub(crate) const TYPE_ACCELEROMETER: u8 = b'A';
pub(crate) const TYPE_GYRO: u8 = b'G';
pub(crate) const TYPE_MAGNETOMETER: u8 = b'M';
pub(crate) const TYPE_LOCATION: u8 = b'L';
pub(crate) const TYPE_QUATERNION: u8 = b'Q';

pub(crate) const COLOR_RECORD_LEN: usize = 6;
pub(crate) const BUTTON_RECORD_LEN: usize = 5;
/// Three little-endian floats
pub(crate) const VECTOR_RECORD_LEN: usize = 15;
/// Four little-endian floats
pub(crate) const QUATERNION_RECORD_LEN: usize = 19;

/// Longest record on the wire
pub const MAX_RECORD_LEN: usize = QUATERNION_RECORD_LEN;

const PRESSED: u8 = b'1';
const RELEASED: u8 = b'0';

/// Control pad buttons of the companion app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Button1,
    Button2,
    Button3,
    Button4,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub const fn from_wire(value: u8) -> Option<Self> {
        Some(match value {
            b'1' => Self::Button1,
            b'2' => Self::Button2,
            b'3' => Self::Button3,
            b'4' => Self::Button4,
            b'5' => Self::Up,
            b'6' => Self::Down,
            b'7' => Self::Left,
            b'8' => Self::Right,
            _ => return None,
        })
    }

    pub const fn to_wire(self) -> u8 {
        match self {
            Self::Button1 => b'1',
            Self::Button2 => b'2',
            Self::Button3 => b'3',
            Self::Button4 => b'4',
            Self::Up => b'5',
            Self::Down => b'6',
            Self::Left => b'7',
            Self::Right => b'8',
        }
    }
}

/// One decoded remote command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandRecord {
    /// Color picked in the app
    Color(Rgb),
    /// Control pad press or release
    Button { button: Button, pressed: bool },
}

impl CommandRecord {
    /// Encode the record with its framing and checksum
    pub fn encode(&self) -> Vec<u8, MAX_RECORD_LEN> {
        let mut record = Vec::new();
        match *self {
            Self::Color(color) => {
                let _ = record.extend_from_slice(&[RECORD_START, TYPE_COLOR, color.r, color.g, color.b]);
            }
            Self::Button { button, pressed } => {
                let state = if pressed { PRESSED } else { RELEASED };
                let _ = record.extend_from_slice(&[RECORD_START, TYPE_BUTTON, button.to_wire(), state]);
            }
        }
        let _ = record.push(checksum(&record));
        record
    }
}

/// Checksum byte for the record bytes preceding it
pub fn checksum(bytes: &[u8]) -> u8 {
    !bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Total record length for a type byte, if the type is known
pub(crate) const fn record_len(kind: u8) -> Option<usize> {
    match kind {
        TYPE_COLOR => Some(COLOR_RECORD_LEN),
        TYPE_BUTTON => Some(BUTTON_RECORD_LEN),
        TYPE_ACCELEROMETER | TYPE_GYRO | TYPE_MAGNETOMETER | TYPE_LOCATION => {
            Some(VECTOR_RECORD_LEN)
        }
        TYPE_QUATERNION => Some(QUATERNION_RECORD_LEN),
        _ => None,
    }
}

/// Decode the pressed flag of a button record
pub(crate) const fn pressed_from_wire(value: u8) -> Option<bool> {
    match value {
        PRESSED => Some(true),
        RELEASED => Some(false),
        _ => None,
    }
}
