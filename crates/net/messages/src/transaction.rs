//! Transaction payloads.

use gossamer_net_primitives::Hash256;

use crate::reader::{Decode, DecodeError, WireReader};

const MAX_SCRIPT: u64 = 10_000;
const MAX_TRANSACTION_POINTS: u64 = 1_000_000;

/// A reference to one output of a previous transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPoint {
    pub hash: Hash256,
    pub index: u32,
}

impl OutPoint {
    /// A null previous output marks a coinbase input.
    pub fn is_null(&self) -> bool {
        self.hash.is_zero() && self.index == u32::MAX
    }
}

impl Decode for OutPoint {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let hash = reader.read_hash()?;
        let index = reader.read_u32_le()?;
        Ok(Self { hash, index })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    pub previous_output: OutPoint,
    pub script: Vec<u8>,
    pub sequence: u32,
}

impl Decode for TransactionInput {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let previous_output = OutPoint::decode(reader)?;
        let script = reader.read_var_bytes(MAX_SCRIPT, "input script")?;
        let sequence = reader.read_u32_le()?;
        Ok(Self {
            previous_output,
            script,
            sequence,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutput {
    /// Value in the smallest currency unit.
    pub value: u64,
    pub script: Vec<u8>,
}

impl Decode for TransactionOutput {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let value = reader.read_u64_le()?;
        let script = reader.read_var_bytes(MAX_SCRIPT, "output script")?;
        Ok(Self { value, script })
    }
}

/// The `tx` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub locktime: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Decode for Transaction {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let version = reader.read_u32_le()?;
        let input_count = reader.read_count(MAX_TRANSACTION_POINTS, "inputs")?;
        let mut inputs = Vec::with_capacity(input_count.min(256));
        for _ in 0..input_count {
            inputs.push(TransactionInput::decode(reader)?);
        }
        let output_count = reader.read_count(MAX_TRANSACTION_POINTS, "outputs")?;
        let mut outputs = Vec::with_capacity(output_count.min(256));
        for _ in 0..output_count {
            outputs.push(TransactionOutput::decode(reader)?);
        }
        let locktime = reader.read_u32_le()?;
        Ok(Self {
            version,
            inputs,
            outputs,
            locktime,
        })
    }
}
