//! The network host boundary: the single source of truth for admitted
//! channels.

use std::sync::Arc;

use async_trait::async_trait;
use gossamer_net_primitives::{Authority, NetworkError};

use crate::channel::Channel;
use crate::stop::StopListener;

/// Address book, channel store, and global stop signal.
///
/// The host serializes its own `store`/`remove` and owns the stop
/// subscription every session couples its lifetime to.
#[async_trait]
pub trait NetworkHost<C: Channel>: Send + Sync + 'static {
    /// Register for the host's global stop event. Synchronous so callers
    /// can subscribe without yielding between a state check and the
    /// subscription.
    fn subscribe_stop(&self) -> StopListener;

    /// Addresses known to the address book.
    async fn address_count(&self) -> usize;

    /// Fetch one address suitable for an outgoing dial.
    async fn fetch_address(&self) -> Result<Authority, NetworkError>;

    /// Channels currently admitted.
    async fn connected_count(&self) -> usize;

    /// Admit `channel` to the store. The host may reject, e.g. a
    /// duplicate peer; its code is surfaced verbatim.
    async fn store(&self, channel: Arc<C>) -> Result<(), NetworkError>;

    /// Drop `channel` from the store.
    async fn remove(&self, channel: &Arc<C>) -> Result<(), NetworkError>;
}
