//! Stop-subscription fabric.
//!
//! Every stoppable object (channel, acceptor, connector, the network host)
//! owns a [`StopDispatch`]. Listeners subscribe at any time; the stop event
//! reaches each exactly once, and subscriptions taken after the event
//! resolve immediately with the recorded code.

use gossamer_net_primitives::NetworkError;
use parking_lot::Mutex;
use tokio::sync::oneshot;

#[derive(Debug)]
enum DispatchState {
    Open(Vec<oneshot::Sender<NetworkError>>),
    Stopped(NetworkError),
}

/// One-shot stop fan-out.
#[derive(Debug)]
pub struct StopDispatch {
    state: Mutex<DispatchState>,
}

impl Default for StopDispatch {
    fn default() -> Self {
        Self::new()
    }
}

impl StopDispatch {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(DispatchState::Open(Vec::new())),
        }
    }

    /// Register for the stop event. If the event already fired, the
    /// listener resolves immediately with the recorded code.
    pub fn subscribe(&self) -> StopListener {
        let (tx, rx) = oneshot::channel();
        match &mut *self.state.lock() {
            DispatchState::Open(listeners) => listeners.push(tx),
            DispatchState::Stopped(reason) => {
                let _ = tx.send(*reason);
            }
        }
        StopListener { rx }
    }

    /// Fire the stop event. Every pending listener receives `reason`
    /// exactly once; the list is then frozen. Returns `false` if the
    /// event had already fired (the first code wins).
    pub fn stop(&self, reason: NetworkError) -> bool {
        let listeners = {
            let mut state = self.state.lock();
            match &mut *state {
                DispatchState::Stopped(_) => return false,
                DispatchState::Open(listeners) => {
                    let listeners = std::mem::take(listeners);
                    *state = DispatchState::Stopped(reason);
                    listeners
                }
            }
        };
        for listener in listeners {
            let _ = listener.send(reason);
        }
        true
    }

    pub fn is_stopped(&self) -> bool {
        matches!(&*self.state.lock(), DispatchState::Stopped(_))
    }
}

/// The receiving side of one stop subscription.
#[derive(Debug)]
pub struct StopListener {
    rx: oneshot::Receiver<NetworkError>,
}

impl StopListener {
    /// Wait for the stop event. A dispatch dropped without firing reads as
    /// [`NetworkError::ServiceStopped`].
    pub async fn wait(self) -> NetworkError {
        self.rx.await.unwrap_or(NetworkError::ServiceStopped)
    }
}
