//! Channel admission and session lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gossamer_net_messages::PEER_MINIMUM_VERSION;
use gossamer_net_primitives::{nonzero_random_nonce, Authority, NetworkError};
use tokio::sync::oneshot;
use tracing::debug;

use crate::acceptor::Acceptor;
use crate::channel::Channel;
use crate::connector::Connector;
use crate::handshake::Handshake;
use crate::host::NetworkHost;
use crate::pending::PendingNonces;
use crate::resource::ResourceStack;
use crate::settings::NetworkSettings;

/// Resolves once an admitted channel has stopped and been removed from
/// the host's registry.
#[derive(Debug)]
pub struct Departure {
    rx: oneshot::Receiver<NetworkError>,
}

impl Departure {
    /// Wait for the channel to leave the network; yields its stop code.
    pub async fn wait(self) -> NetworkError {
        self.rx.await.unwrap_or(NetworkError::ServiceStopped)
    }
}

/// Drives channel admission for one direction of connection.
///
/// A session is created stopped, started once, and couples its lifetime to
/// the host's global stop signal: when that fires, the session stops
/// creating connections and cascade-stops every acceptor and connector it
/// created. Channels themselves are stopped through their own stop
/// subscriptions, so a stopping session simply falls out of scope.
pub struct Session<C: Channel, N: NetworkHost<C>> {
    stopped: Arc<AtomicBool>,
    incoming: bool,
    notify: bool,
    settings: Arc<NetworkSettings>,
    network: Arc<N>,
    pending: Arc<PendingNonces<C>>,
    handshake: Arc<dyn Handshake<C>>,
    resources: Arc<ResourceStack>,
}

impl<C: Channel, N: NetworkHost<C>> std::fmt::Debug for Session<C, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("stopped", &self.stopped())
            .field("incoming", &self.incoming)
            .field("notify", &self.notify)
            .finish_non_exhaustive()
    }
}

impl<C: Channel, N: NetworkHost<C>> Session<C, N> {
    /// A session admitting channels this node dials out.
    ///
    /// `persistent` marks admitted channels for announcement to the host's
    /// connection subscribers.
    pub fn outbound(
        network: Arc<N>,
        settings: Arc<NetworkSettings>,
        pending: Arc<PendingNonces<C>>,
        handshake: Arc<dyn Handshake<C>>,
        persistent: bool,
    ) -> Self {
        Self::new(network, settings, pending, handshake, false, persistent)
    }

    /// A session admitting channels dialed in by remote peers.
    pub fn inbound(
        network: Arc<N>,
        settings: Arc<NetworkSettings>,
        pending: Arc<PendingNonces<C>>,
        handshake: Arc<dyn Handshake<C>>,
    ) -> Self {
        Self::new(network, settings, pending, handshake, true, false)
    }

    fn new(
        network: Arc<N>,
        settings: Arc<NetworkSettings>,
        pending: Arc<PendingNonces<C>>,
        handshake: Arc<dyn Handshake<C>>,
        incoming: bool,
        persistent: bool,
    ) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(true)),
            incoming,
            notify: persistent,
            settings,
            network,
            pending,
            handshake,
            resources: Arc::new(ResourceStack::new()),
        }
    }

    // Lifecycle.
    // ------------------------------------------------------------------

    /// Transition from stopped to running and couple to the host's global
    /// stop signal.
    ///
    /// The stopped-flag flip and the stop subscription happen in one
    /// synchronous sequence; there is no suspension point between them for
    /// a stop to slip through.
    pub fn start(&self) -> Result<(), NetworkError> {
        if !self.stopped() {
            return Err(NetworkError::OperationFailed);
        }

        self.stopped.store(false, Ordering::Relaxed);
        let listener = self.network.subscribe_stop();

        let stopped = Arc::clone(&self.stopped);
        let resources = Arc::clone(&self.resources);
        tokio::spawn(async move {
            let reason = listener.wait().await;
            // Stop creating connections; running admissions finalize on
            // their own and report their codes.
            stopped.store(true, Ordering::Relaxed);
            resources.stop_all(reason);
        });

        Ok(())
    }

    /// Race-free read of the session flag.
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    // Properties.
    // ------------------------------------------------------------------

    pub async fn address_count(&self) -> usize {
        self.network.address_count().await
    }

    pub async fn fetch_address(&self) -> Result<Authority, NetworkError> {
        self.network.fetch_address().await
    }

    pub async fn connection_count(&self) -> usize {
        self.network.connected_count().await
    }

    /// Advisory blacklist membership; not applied during admission.
    pub fn blacklisted(&self, authority: &Authority) -> bool {
        self.settings.blacklists.contains(authority)
    }

    pub fn settings(&self) -> &NetworkSettings {
        &self.settings
    }

    // Socket creators.
    // ------------------------------------------------------------------

    /// Allocate a listener handle owned by this session; session stop
    /// cascades to it.
    pub fn create_acceptor(&self) -> Arc<Acceptor> {
        let acceptor = Arc::new(Acceptor::new(Arc::clone(&self.settings)));
        self.resources.push(acceptor.clone());
        acceptor
    }

    /// Allocate a dialer handle owned by this session; session stop
    /// cascades to it.
    pub fn create_connector(&self) -> Arc<Connector> {
        let connector = Arc::new(Connector::new(Arc::clone(&self.settings)));
        self.resources.push(connector.clone());
        connector
    }

    // Registration.
    // ------------------------------------------------------------------

    /// Run the admission state machine for `channel`.
    ///
    /// On success the channel is stored with the host and exactly one stop
    /// wrapper is armed: when the channel stops, the host removal runs and
    /// the returned [`Departure`] resolves with the stop code. On failure
    /// the channel is stopped with the reported code, nothing is stored,
    /// and no wrapper is armed.
    pub async fn register_channel(&self, channel: Arc<C>) -> Result<Departure, NetworkError> {
        let result = self.admit(&channel).await;
        match result {
            Ok(()) => Ok(self.arm_stop_wrapper(&channel)),
            Err(reason) => {
                channel.stop(reason);
                Err(reason)
            }
        }
    }

    async fn admit(&self, channel: &Arc<C>) -> Result<(), NetworkError> {
        if self.stopped() {
            return Err(NetworkError::ServiceStopped);
        }

        // Incoming channels are admitted under the remote nonce; only
        // outgoing dials pend under a local one.
        if self.incoming {
            return self.handshake_and_store(channel).await;
        }

        channel.set_notify(self.notify);
        channel.set_nonce(nonzero_random_nonce());
        if let Err(reason) = self.pending.store(channel) {
            channel.set_nonce(0);
            return Err(reason);
        }

        let admitted = self.handshake_and_store(channel).await;
        self.unpend(channel);
        admitted
    }

    async fn handshake_and_store(&self, channel: &Arc<C>) -> Result<(), NetworkError> {
        channel.start().await?;

        if let Err(reason) = self.handshake.perform(channel).await {
            debug!(authority = %channel.authority(), %reason, "failure in handshake");
            return Err(reason);
        }

        let version = channel.version().ok_or(NetworkError::AcceptFailed)?;

        // The loopback test is for incoming channels only: our own nonce
        // echoed back means we dialed our own listening socket.
        if self.incoming && self.pending.exists(version.nonce) {
            debug!(authority = %channel.authority(), "rejected connection as loopback");
            return Err(NetworkError::AcceptFailed);
        }

        if version.value < PEER_MINIMUM_VERSION {
            debug!(
                authority = %channel.authority(),
                version = version.value,
                minimum = PEER_MINIMUM_VERSION,
                "peer version below minimum"
            );
            return Err(NetworkError::AcceptFailed);
        }

        // A session stopping mid-handshake still finalizes here, but never
        // with an admission.
        if self.stopped() {
            return Err(NetworkError::ServiceStopped);
        }

        self.network.store(Arc::clone(channel)).await
    }

    fn unpend(&self, channel: &Arc<C>) {
        if let Err(reason) = self.pending.remove(channel) {
            debug!(%reason, "failed to unpend channel");
        }
        channel.set_nonce(0);
    }

    fn arm_stop_wrapper(&self, channel: &Arc<C>) -> Departure {
        let listener = channel.subscribe_stop();
        let network = Arc::clone(&self.network);
        let channel = Arc::clone(channel);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let reason = listener.wait().await;
            if let Err(remove_error) = network.remove(&channel).await {
                debug!(%remove_error, "failed to remove channel");
            }
            let _ = tx.send(reason);
        });
        Departure { rx }
    }
}

impl<C: Channel, N: NetworkHost<C>> Drop for Session<C, N> {
    fn drop(&mut self) {
        debug_assert!(self.stopped(), "the session was not stopped");
    }
}
