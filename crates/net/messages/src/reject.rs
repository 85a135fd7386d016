//! The `reject` payload.

use crate::reader::{Decode, DecodeError, WireReader};

const MAX_REJECT_TEXT: u64 = 111;

/// Why a peer rejected one of our messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCode {
    Malformed,
    Invalid,
    Obsolete,
    Duplicate,
    Nonstandard,
    Dust,
    InsufficientFee,
    Checkpoint,
    /// A code this node does not understand, preserved verbatim.
    Other(u8),
}

impl RejectCode {
    pub fn from_byte(value: u8) -> Self {
        match value {
            0x01 => Self::Malformed,
            0x10 => Self::Invalid,
            0x11 => Self::Obsolete,
            0x12 => Self::Duplicate,
            0x40 => Self::Nonstandard,
            0x41 => Self::Dust,
            0x42 => Self::InsufficientFee,
            0x43 => Self::Checkpoint,
            other => Self::Other(other),
        }
    }

    pub const fn byte(&self) -> u8 {
        match self {
            Self::Malformed => 0x01,
            Self::Invalid => 0x10,
            Self::Obsolete => 0x11,
            Self::Duplicate => 0x12,
            Self::Nonstandard => 0x40,
            Self::Dust => 0x41,
            Self::InsufficientFee => 0x42,
            Self::Checkpoint => 0x43,
            Self::Other(other) => *other,
        }
    }
}

/// A peer's rejection of a message we sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectMessage {
    /// Command string of the rejected message.
    pub message: String,
    pub code: RejectCode,
    pub reason: String,
    /// Extra data; the rejected object's hash for `block` and `tx`.
    pub data: Vec<u8>,
}

impl Decode for RejectMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let message = reader.read_var_string(MAX_REJECT_TEXT, "reject message")?;
        let code = RejectCode::from_byte(reader.read_u8()?);
        let reason = reader.read_var_string(MAX_REJECT_TEXT, "reject reason")?;
        let data = reader.read_remaining();
        Ok(Self {
            message,
            code,
            reason,
            data,
        })
    }
}
