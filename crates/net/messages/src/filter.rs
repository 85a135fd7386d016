//! Bloom filter payloads: `filteradd` and `filterload`.

use crate::reader::{Decode, DecodeError, WireReader};

/// Largest element a `filteradd` may insert.
pub const MAX_FILTER_ADD: u64 = 520;

/// Largest filter bitmap a `filterload` may install.
pub const MAX_FILTER_LOAD: u64 = 36_000;

/// Most hash functions a loaded filter may request.
pub const MAX_FILTER_FUNCTIONS: u64 = 50;

/// The `filteradd` payload: one element for the peer's current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterAddMessage {
    pub data: Vec<u8>,
}

impl Decode for FilterAddMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let data = reader.read_var_bytes(MAX_FILTER_ADD, "filter element")?;
        Ok(Self { data })
    }
}

/// The `filterload` payload: a bloom filter for transaction relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLoadMessage {
    pub filter: Vec<u8>,
    pub hash_functions: u32,
    pub tweak: u32,
    pub flags: u8,
}

impl Decode for FilterLoadMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let filter = reader.read_var_bytes(MAX_FILTER_LOAD, "filter")?;
        let hash_functions = reader.read_u32_le()?;
        if u64::from(hash_functions) > MAX_FILTER_FUNCTIONS {
            return Err(DecodeError::Oversized {
                what: "filter functions",
                len: u64::from(hash_functions),
                max: MAX_FILTER_FUNCTIONS,
            });
        }
        let tweak = reader.read_u32_le()?;
        let flags = reader.read_u8()?;
        Ok(Self {
            filter,
            hash_functions,
            tweak,
            flags,
        })
    }
}
