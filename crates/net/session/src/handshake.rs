//! The version-exchange hook run during channel admission.

use std::sync::Arc;

use async_trait::async_trait;
use gossamer_net_primitives::NetworkError;

use crate::channel::Channel;

/// The version-negotiation sub-protocol the session runs after a channel
/// starts.
///
/// On success the channel's `version()` must yield the peer's version
/// message. The concrete wire exchange (version/verack ping-pong,
/// timeouts) lives with the protocol layer; the session only awaits the
/// outcome.
#[async_trait]
pub trait Handshake<C: Channel>: Send + Sync + 'static {
    async fn perform(&self, channel: &Arc<C>) -> Result<(), NetworkError>;
}

/// A handshake that does nothing, for channels whose version exchange
/// already happened elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHandshake;

#[async_trait]
impl<C: Channel> Handshake<C> for NullHandshake {
    async fn perform(&self, _channel: &Arc<C>) -> Result<(), NetworkError> {
        Ok(())
    }
}
