//! Network configuration surface.

use std::time::Duration;

use gossamer_net_primitives::Authority;
use serde::{Deserialize, Serialize};

/// Tunables consumed by sessions and their collaborators.
///
/// The session core itself reads only `blacklists`; the connection and
/// timing knobs parameterize the socket and protocol layers behind the
/// channel boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Most simultaneous inbound channels the node accepts.
    pub inbound_connections: u32,
    /// Outbound channel target the node dials towards.
    pub outbound_connections: u32,
    pub connect_timeout_seconds: u32,
    pub channel_handshake_seconds: u32,
    pub channel_heartbeat_minutes: u32,
    pub channel_inactivity_minutes: u32,
    pub channel_expiration_minutes: u32,
    /// Endpoints this node refuses to talk to.
    pub blacklists: Vec<Authority>,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            inbound_connections: 8,
            outbound_connections: 8,
            connect_timeout_seconds: 5,
            channel_handshake_seconds: 30,
            channel_heartbeat_minutes: 5,
            channel_inactivity_minutes: 10,
            channel_expiration_minutes: 90,
            blacklists: Vec::new(),
        }
    }
}

impl NetworkSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn channel_handshake(&self) -> Duration {
        Duration::from_secs(u64::from(self.channel_handshake_seconds))
    }

    pub fn channel_heartbeat(&self) -> Duration {
        Duration::from_secs(u64::from(self.channel_heartbeat_minutes) * 60)
    }

    pub fn channel_inactivity(&self) -> Duration {
        Duration::from_secs(u64::from(self.channel_inactivity_minutes) * 60)
    }

    pub fn channel_expiration(&self) -> Duration {
        Duration::from_secs(u64::from(self.channel_expiration_minutes) * 60)
    }
}
