//! Inventory payloads: `inv`, `getdata`, `notfound`, `merkleblock`.

use gossamer_net_primitives::Hash256;

use crate::block::BlockHeader;
use crate::reader::{Decode, DecodeError, WireReader};

/// Most inventory vectors a single payload may carry.
pub const MAX_INVENTORY: u64 = 50_000;

/// What an inventory vector points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryKind {
    Error,
    Transaction,
    Block,
    FilteredBlock,
}

impl InventoryKind {
    /// Unrecognized type numbers collapse to [`InventoryKind::Error`], the
    /// wire's own "none" value.
    pub fn from_number(value: u32) -> Self {
        match value {
            1 => Self::Transaction,
            2 => Self::Block,
            3 => Self::FilteredBlock,
            _ => Self::Error,
        }
    }

    pub const fn number(&self) -> u32 {
        match self {
            Self::Error => 0,
            Self::Transaction => 1,
            Self::Block => 2,
            Self::FilteredBlock => 3,
        }
    }
}

/// One typed hash in an inventory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InventoryVector {
    pub kind: InventoryKind,
    pub hash: Hash256,
}

impl Decode for InventoryVector {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let kind = InventoryKind::from_number(reader.read_u32_le()?);
        let hash = reader.read_hash()?;
        Ok(Self { kind, hash })
    }
}

fn decode_inventory_list(reader: &mut WireReader) -> Result<Vec<InventoryVector>, DecodeError> {
    let count = reader.read_count(MAX_INVENTORY, "inventory")?;
    let mut inventory = Vec::with_capacity(count.min(1_024));
    for _ in 0..count {
        inventory.push(InventoryVector::decode(reader)?);
    }
    Ok(inventory)
}

macro_rules! inventory_message {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            pub inventory: Vec<InventoryVector>,
        }

        impl Decode for $name {
            fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
                Ok(Self {
                    inventory: decode_inventory_list(reader)?,
                })
            }
        }
    };
}

inventory_message!(
    /// The `inv` payload: objects the peer has for us.
    InventoryMessage
);
inventory_message!(
    /// The `getdata` payload: objects the peer wants from us.
    GetDataMessage
);
inventory_message!(
    /// The `notfound` payload: requested objects the peer does not have.
    NotFoundMessage
);

/// The `merkleblock` payload: a header plus the partial merkle branch for
/// transactions matching the peer's bloom filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleBlockMessage {
    pub header: BlockHeader,
    pub total_transactions: u32,
    pub hashes: Vec<Hash256>,
    pub flags: Vec<u8>,
}

impl Decode for MerkleBlockMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let header = BlockHeader::decode(reader)?;
        let total_transactions = reader.read_u32_le()?;
        let count = reader.read_count(MAX_INVENTORY, "merkle hashes")?;
        let mut hashes = Vec::with_capacity(count.min(1_024));
        for _ in 0..count {
            hashes.push(reader.read_hash()?);
        }
        let flags = reader.read_var_bytes(MAX_INVENTORY, "merkle flags")?;
        Ok(Self {
            header,
            total_transactions,
            hashes,
            flags,
        })
    }
}
