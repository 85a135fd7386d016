//! Owning container for session-created resources.
//!
//! Acceptors and connectors live here for the lifetime of their session;
//! the session's stop cascades through the stack so every resource it
//! created is stopped exactly once.

use std::sync::Arc;

use gossamer_net_primitives::NetworkError;
use parking_lot::Mutex;
use tracing::trace;

/// Anything a session owns and must stop on shutdown.
pub trait SessionResource: Send + Sync + 'static {
    fn stop(&self, reason: NetworkError);
}

#[derive(Debug)]
enum StackState {
    Active(Vec<Arc<dyn SessionResource>>),
    Stopped(NetworkError),
}

impl std::fmt::Debug for dyn SessionResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionResource")
    }
}

/// The session's resource container with cascade stop.
#[derive(Debug)]
pub struct ResourceStack {
    state: Mutex<StackState>,
}

impl Default for ResourceStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceStack {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StackState::Active(Vec::new())),
        }
    }

    /// Adopt `resource`. If the cascade already ran, the resource is
    /// stopped immediately with the recorded code.
    pub fn push(&self, resource: Arc<dyn SessionResource>) {
        let reason = {
            let mut state = self.state.lock();
            match &mut *state {
                StackState::Active(resources) => {
                    resources.push(resource.clone());
                    return;
                }
                StackState::Stopped(reason) => *reason,
            }
        };
        resource.stop(reason);
    }

    /// Stop every held resource with `reason`, exactly once each, and
    /// freeze the stack. A second cascade is a no-op.
    pub fn stop_all(&self, reason: NetworkError) {
        let resources = {
            let mut state = self.state.lock();
            match &mut *state {
                StackState::Stopped(_) => return,
                StackState::Active(resources) => {
                    let resources = std::mem::take(resources);
                    *state = StackState::Stopped(reason);
                    resources
                }
            }
        };
        trace!(count = resources.len(), %reason, "stopping session resources");
        for resource in resources {
            resource.stop(reason);
        }
    }

    /// Resources currently held.
    pub fn len(&self) -> usize {
        match &*self.state.lock() {
            StackState::Active(resources) => resources.len(),
            StackState::Stopped(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
