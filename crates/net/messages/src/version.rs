//! The `version` handshake payload.

use crate::address::NetworkAddress;
use crate::reader::{Decode, DecodeError, WireReader};

/// Peers announcing a protocol version below this are not admitted.
pub const PEER_MINIMUM_VERSION: u32 = 31_800;

/// Relay flags appear on the wire from this protocol version on.
pub const RELAY_FIELD_VERSION: u32 = 70_001;

const MAX_USER_AGENT: u64 = 256;

/// The first message on every channel: the peer's protocol version, its
/// self-announced session nonce, and its view of both endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMessage {
    /// Protocol version the peer speaks.
    pub value: u32,
    pub services: u64,
    pub timestamp: u64,
    /// The sender's view of the receiving endpoint.
    pub address_receiver: NetworkAddress,
    /// The sender's own endpoint.
    pub address_sender: NetworkAddress,
    /// The peer's session nonce, echoed back for loopback detection.
    pub nonce: u64,
    pub user_agent: String,
    pub start_height: u32,
    /// Whether the peer wants unsolicited transaction relay. Absent before
    /// protocol 70001; defaults on.
    pub relay: bool,
}

impl Decode for VersionMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let value = reader.read_u32_le()?;
        let services = reader.read_u64_le()?;
        let timestamp = reader.read_u64_le()?;
        let address_receiver = NetworkAddress::decode(reader)?;
        let address_sender = NetworkAddress::decode(reader)?;
        let nonce = reader.read_u64_le()?;
        let user_agent = reader.read_var_string(MAX_USER_AGENT, "user agent")?;
        let start_height = reader.read_u32_le()?;
        let relay = if value >= RELAY_FIELD_VERSION && reader.remaining() > 0 {
            reader.read_u8()? != 0
        } else {
            true
        };
        Ok(Self {
            value,
            services,
            timestamp,
            address_receiver,
            address_sender,
            nonce,
            user_agent,
            start_height,
            relay,
        })
    }
}
