//! Outbound dialer handle.

use std::sync::Arc;
use std::time::Duration;

use gossamer_net_primitives::NetworkError;

use crate::resource::SessionResource;
use crate::settings::NetworkSettings;
use crate::stop::{StopDispatch, StopListener};

/// Handle for outbound dialing.
///
/// The transport layer races each dial against
/// [`connect_timeout`](Self::connect_timeout) and abandons in-flight dials
/// when the stop event fires. Created through `Session::create_connector`
/// so the session's stop cascade reaches it.
#[derive(Debug)]
pub struct Connector {
    settings: Arc<NetworkSettings>,
    stop: StopDispatch,
}

impl Connector {
    pub fn new(settings: Arc<NetworkSettings>) -> Self {
        Self {
            settings,
            stop: StopDispatch::new(),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        self.settings.connect_timeout()
    }

    /// Register for this connector's stop event.
    pub fn subscribe_stop(&self) -> StopListener {
        self.stop.subscribe()
    }

    /// Stop dialing. Idempotent.
    pub fn stop(&self, reason: NetworkError) {
        self.stop.stop(reason);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }
}

impl SessionResource for Connector {
    fn stop(&self, reason: NetworkError) {
        Connector::stop(self, reason);
    }
}
