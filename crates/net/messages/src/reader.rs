//! Cursor over a wire payload with the protocol's primitive reads.

use bytes::{Buf, Bytes};
use gossamer_net_primitives::Hash256;
use thiserror::Error;

/// A payload failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload ended before the message did.
    #[error("unexpected end of payload")]
    UnexpectedEnd,

    /// A length field exceeds the protocol cap for that field.
    #[error("{what} length {len} exceeds maximum {max}")]
    Oversized {
        what: &'static str,
        len: u64,
        max: u64,
    },

    /// A text field is not valid UTF-8.
    #[error("{0} is not valid utf-8")]
    BadText(&'static str),
}

/// Types that decode themselves from a [`WireReader`].
pub trait Decode: Sized {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError>;
}

/// Little-endian cursor over one payload.
///
/// Every read checks the remaining length first, so a truncated payload
/// always surfaces as [`DecodeError::UnexpectedEnd`] and byte-string
/// allocations are bounded by the actual payload size.
#[derive(Debug)]
pub struct WireReader {
    buf: Bytes,
}

impl WireReader {
    pub fn new(buf: Bytes) -> Self {
        Self { buf }
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn need(&self, len: usize) -> Result<(), DecodeError> {
        if self.buf.remaining() < len {
            return Err(DecodeError::UnexpectedEnd);
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.need(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        self.need(2)?;
        Ok(self.buf.get_u16_le())
    }

    /// Port numbers are the protocol's one big-endian field.
    pub fn read_u16_be(&mut self) -> Result<u16, DecodeError> {
        self.need(2)?;
        Ok(self.buf.get_u16())
    }

    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        self.need(4)?;
        Ok(self.buf.get_u32_le())
    }

    pub fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
        self.need(8)?;
        Ok(self.buf.get_u64_le())
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        self.need(len)?;
        Ok(self.buf.copy_to_bytes(len))
    }

    /// Consume whatever is left of the payload.
    pub fn read_remaining(&mut self) -> Vec<u8> {
        let len = self.buf.remaining();
        self.buf.copy_to_bytes(len).to_vec()
    }

    pub fn read_hash(&mut self) -> Result<Hash256, DecodeError> {
        self.need(32)?;
        let mut bytes = [0u8; 32];
        self.buf.copy_to_slice(&mut bytes);
        Ok(Hash256::new(bytes))
    }

    /// Variable-length integer: one byte below 0xfd, then 0xfd/0xfe/0xff
    /// prefixing a u16/u32/u64. Non-minimal encodings are accepted.
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        match self.read_u8()? {
            len @ 0..=0xfc => Ok(u64::from(len)),
            0xfd => self.read_u16_le().map(u64::from),
            0xfe => self.read_u32_le().map(u64::from),
            0xff => self.read_u64_le(),
        }
    }

    /// A varint count capped at `max`, for list headers.
    pub fn read_count(&mut self, max: u64, what: &'static str) -> Result<usize, DecodeError> {
        let len = self.read_varint()?;
        if len > max {
            return Err(DecodeError::Oversized { what, len, max });
        }
        Ok(len as usize)
    }

    /// Varint-prefixed byte string.
    pub fn read_var_bytes(&mut self, max: u64, what: &'static str) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_count(max, what)?;
        Ok(self.read_bytes(len)?.to_vec())
    }

    /// Varint-prefixed UTF-8 string.
    pub fn read_var_string(&mut self, max: u64, what: &'static str) -> Result<String, DecodeError> {
        let bytes = self.read_var_bytes(max, what)?;
        String::from_utf8(bytes).map_err(|_| DecodeError::BadText(what))
    }
}
