//! Inbound listener handle.

use std::sync::Arc;

use gossamer_net_primitives::NetworkError;

use crate::resource::SessionResource;
use crate::settings::NetworkSettings;
use crate::stop::{StopDispatch, StopListener};

/// Handle for one listening socket.
///
/// The socket accept loop lives with the transport layer, which watches
/// [`subscribe_stop`](Self::subscribe_stop) and winds down when the owning
/// session stops. Created through `Session::create_acceptor` so the
/// session's stop cascade reaches it.
#[derive(Debug)]
pub struct Acceptor {
    settings: Arc<NetworkSettings>,
    stop: StopDispatch,
}

impl Acceptor {
    pub fn new(settings: Arc<NetworkSettings>) -> Self {
        Self {
            settings,
            stop: StopDispatch::new(),
        }
    }

    pub fn settings(&self) -> &NetworkSettings {
        &self.settings
    }

    /// Register for this acceptor's stop event.
    pub fn subscribe_stop(&self) -> StopListener {
        self.stop.subscribe()
    }

    /// Stop accepting. Idempotent.
    pub fn stop(&self, reason: NetworkError) {
        self.stop.stop(reason);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }
}

impl SessionResource for Acceptor {
    fn stop(&self, reason: NetworkError) {
        Acceptor::stop(self, reason);
    }
}
