//! The channel boundary: a full-duplex peer connection as the session
//! sees it.

use async_trait::async_trait;
use gossamer_net_messages::VersionMessage;
use gossamer_net_primitives::{Authority, NetworkError};

use crate::stop::StopListener;

/// A full-duplex connection to one peer.
///
/// Implemented by the socket layer; the session only drives the lifecycle.
/// A channel is shared between the session (during registration), the
/// network host (after admission), and its own callbacks; it lives as long
/// as the longest holder.
#[async_trait]
pub trait Channel: Send + Sync + 'static {
    /// Begin the channel's read cycle. Completes exactly once.
    async fn start(&self) -> Result<(), NetworkError>;

    /// Stop the channel with `reason`. Safe on a channel that never
    /// started, and idempotent.
    fn stop(&self, reason: NetworkError);

    /// Register for this channel's stop event.
    fn subscribe_stop(&self) -> StopListener;

    /// The session nonce currently assigned, zero when not pending.
    fn nonce(&self) -> u64;

    fn set_nonce(&self, nonce: u64);

    /// Whether the host should announce this channel on admission.
    fn set_notify(&self, notify: bool);

    /// The peer's version message, once the handshake produced one.
    fn version(&self) -> Option<VersionMessage>;

    /// The peer's endpoint identity.
    fn authority(&self) -> Authority;
}
