//! Typed wire messages for the gossamer gossip protocol.
//!
//! One module per payload family, each owning its struct and [`Decode`]
//! impl. Framing (the 24-byte header, checksums, socket reads) belongs to
//! the channel layer; this crate starts at the payload bytes.

pub mod address;
pub mod alert;
pub mod block;
pub mod empty;
pub mod filter;
pub mod get_blocks;
pub mod inventory;
pub mod kind;
pub mod ping;
pub mod reader;
pub mod reject;
pub mod transaction;
pub mod version;

pub use address::{AddressMessage, NetworkAddress, TimestampedAddress};
pub use alert::AlertMessage;
pub use block::{BlockHeader, BlockMessage, HeadersMessage};
pub use empty::{FilterClearMessage, GetAddressMessage, MemoryPoolMessage, VerackMessage};
pub use filter::{FilterAddMessage, FilterLoadMessage};
pub use get_blocks::{GetBlocksMessage, GetHeadersMessage};
pub use inventory::{
    GetDataMessage, InventoryKind, InventoryMessage, InventoryVector, MerkleBlockMessage,
    NotFoundMessage,
};
pub use kind::MessageKind;
pub use ping::{PingMessage, PongMessage};
pub use reader::{Decode, DecodeError, WireReader};
pub use reject::{RejectCode, RejectMessage};
pub use transaction::{OutPoint, Transaction, TransactionInput, TransactionOutput};
pub use version::{VersionMessage, PEER_MINIMUM_VERSION};

use bytes::Bytes;

/// Decode one payload of type `M` from `payload`.
///
/// Trailing bytes are tolerated; peers routinely pad or extend payloads and
/// the parser only consumes what the message defines.
pub fn decode_payload<M: Decode>(payload: Bytes) -> Result<M, DecodeError> {
    let mut reader = WireReader::new(payload);
    M::decode(&mut reader)
}
