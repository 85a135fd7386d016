//! Message kind discriminator and the command-string table.

use std::fmt;

/// The kind of a wire message, recovered from the command field of the
/// message header by the framing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Address,
    Alert,
    Block,
    FilterAdd,
    FilterClear,
    FilterLoad,
    GetAddress,
    GetBlocks,
    GetData,
    GetHeaders,
    Headers,
    Inventory,
    MemoryPool,
    MerkleBlock,
    NotFound,
    Ping,
    Pong,
    Reject,
    Transaction,
    Verack,
    Version,
    /// A command this node does not understand.
    Unknown,
}

impl MessageKind {
    /// Every known kind, in command order.
    pub const ALL: [MessageKind; 21] = [
        Self::Address,
        Self::Alert,
        Self::Block,
        Self::FilterAdd,
        Self::FilterClear,
        Self::FilterLoad,
        Self::GetAddress,
        Self::GetBlocks,
        Self::GetData,
        Self::GetHeaders,
        Self::Headers,
        Self::Inventory,
        Self::MemoryPool,
        Self::MerkleBlock,
        Self::NotFound,
        Self::Ping,
        Self::Pong,
        Self::Reject,
        Self::Transaction,
        Self::Verack,
        Self::Version,
    ];

    /// The wire command string for this kind.
    pub const fn command(&self) -> &'static str {
        match self {
            Self::Address => "addr",
            Self::Alert => "alert",
            Self::Block => "block",
            Self::FilterAdd => "filteradd",
            Self::FilterClear => "filterclear",
            Self::FilterLoad => "filterload",
            Self::GetAddress => "getaddr",
            Self::GetBlocks => "getblocks",
            Self::GetData => "getdata",
            Self::GetHeaders => "getheaders",
            Self::Headers => "headers",
            Self::Inventory => "inv",
            Self::MemoryPool => "mempool",
            Self::MerkleBlock => "merkleblock",
            Self::NotFound => "notfound",
            Self::Ping => "ping",
            Self::Pong => "pong",
            Self::Reject => "reject",
            Self::Transaction => "tx",
            Self::Verack => "verack",
            Self::Version => "version",
            Self::Unknown => "unknown",
        }
    }

    /// Map a wire command string to its kind; anything unrecognized is
    /// [`MessageKind::Unknown`].
    pub fn from_command(command: &str) -> Self {
        match command {
            "addr" => Self::Address,
            "alert" => Self::Alert,
            "block" => Self::Block,
            "filteradd" => Self::FilterAdd,
            "filterclear" => Self::FilterClear,
            "filterload" => Self::FilterLoad,
            "getaddr" => Self::GetAddress,
            "getblocks" => Self::GetBlocks,
            "getdata" => Self::GetData,
            "getheaders" => Self::GetHeaders,
            "headers" => Self::Headers,
            "inv" => Self::Inventory,
            "mempool" => Self::MemoryPool,
            "merkleblock" => Self::MerkleBlock,
            "notfound" => Self::NotFound,
            "ping" => Self::Ping,
            "pong" => Self::Pong,
            "reject" => Self::Reject,
            "tx" => Self::Transaction,
            "verack" => Self::Verack,
            "version" => Self::Version,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}
