//! Peer address payloads.

use std::net::{IpAddr, Ipv6Addr};

use gossamer_net_primitives::Authority;

use crate::reader::{Decode, DecodeError, WireReader};

/// Most addresses a single `addr` payload may carry.
pub const MAX_ADDRESSES: u64 = 1_000;

/// A peer endpoint as carried on the wire: service bits plus a 16-byte
/// address (IPv4 arrives v4-mapped) and a big-endian port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkAddress {
    pub services: u64,
    pub ip: Ipv6Addr,
    pub port: u16,
}

impl NetworkAddress {
    /// Collapse v4-mapped addresses so blacklists compare against the form
    /// operators actually write down.
    pub fn authority(&self) -> Authority {
        let ip = match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        };
        Authority::new(ip, self.port)
    }
}

impl Decode for NetworkAddress {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let services = reader.read_u64_le()?;
        let mut octets = [0u8; 16];
        octets.copy_from_slice(&reader.read_bytes(16)?);
        let ip = Ipv6Addr::from(octets);
        let port = reader.read_u16_be()?;
        Ok(Self { services, ip, port })
    }
}

/// A [`NetworkAddress`] with the last-seen timestamp the `addr` payload
/// attaches to each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampedAddress {
    pub timestamp: u32,
    pub address: NetworkAddress,
}

impl Decode for TimestampedAddress {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let timestamp = reader.read_u32_le()?;
        let address = NetworkAddress::decode(reader)?;
        Ok(Self { timestamp, address })
    }
}

/// The `addr` payload: known peers gossiped around the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressMessage {
    pub addresses: Vec<TimestampedAddress>,
}

impl Decode for AddressMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let count = reader.read_count(MAX_ADDRESSES, "addresses")?;
        let mut addresses = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            addresses.push(TimestampedAddress::decode(reader)?);
        }
        Ok(Self { addresses })
    }
}
