//! Block header and block payloads.

use gossamer_net_primitives::Hash256;

use crate::reader::{Decode, DecodeError, WireReader};
use crate::transaction::Transaction;

/// Most headers a single `headers` payload may carry.
pub const MAX_HEADERS: u64 = 2_000;

const MAX_BLOCK_TRANSACTIONS: u64 = 1_000_000;

/// The 80-byte block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: u32,
    pub previous: Hash256,
    pub merkle_root: Hash256,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl Decode for BlockHeader {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        Ok(Self {
            version: reader.read_u32_le()?,
            previous: reader.read_hash()?,
            merkle_root: reader.read_hash()?,
            timestamp: reader.read_u32_le()?,
            bits: reader.read_u32_le()?,
            nonce: reader.read_u32_le()?,
        })
    }
}

/// The `block` payload: a header and its transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMessage {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Decode for BlockMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let header = BlockHeader::decode(reader)?;
        let count = reader.read_count(MAX_BLOCK_TRANSACTIONS, "transactions")?;
        let mut transactions = Vec::with_capacity(count.min(1_024));
        for _ in 0..count {
            transactions.push(Transaction::decode(reader)?);
        }
        Ok(Self {
            header,
            transactions,
        })
    }
}

/// The `headers` payload. Each header is trailed on the wire by a varint
/// transaction count, always zero in practice and ignored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadersMessage {
    pub headers: Vec<BlockHeader>,
}

impl Decode for HeadersMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let count = reader.read_count(MAX_HEADERS, "headers")?;
        let mut headers = Vec::with_capacity(count.min(256));
        for _ in 0..count {
            headers.push(BlockHeader::decode(reader)?);
            reader.read_varint()?;
        }
        Ok(Self { headers })
    }
}
