//! Locator-based requests: `getblocks` and `getheaders`.

use gossamer_net_primitives::Hash256;

use crate::reader::{Decode, DecodeError, WireReader};

/// Most locator hashes a request may carry; a locator back to genesis
/// needs far fewer thanks to its exponential spacing.
pub const MAX_LOCATOR: u64 = 500;

fn decode_locator_request(
    reader: &mut WireReader,
) -> Result<(u32, Vec<Hash256>, Hash256), DecodeError> {
    let version = reader.read_u32_le()?;
    let count = reader.read_count(MAX_LOCATOR, "locator")?;
    let mut locator = Vec::with_capacity(count.min(64));
    for _ in 0..count {
        locator.push(reader.read_hash()?);
    }
    let stop = reader.read_hash()?;
    Ok((version, locator, stop))
}

macro_rules! locator_message {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub version: u32,
            /// Block hashes from the requester's tip backwards, exponentially
            /// spaced, locating the fork point.
            pub locator: Vec<Hash256>,
            /// Stop at this hash, or at the response cap when zero.
            pub stop: Hash256,
        }

        impl Decode for $name {
            fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
                let (version, locator, stop) = decode_locator_request(reader)?;
                Ok(Self {
                    version,
                    locator,
                    stop,
                })
            }
        }
    };
}

locator_message!(
    /// The `getblocks` payload.
    GetBlocksMessage
);
locator_message!(
    /// The `getheaders` payload.
    GetHeadersMessage
);
