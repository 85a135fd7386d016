//! Registry of channels awaiting handshake, keyed by session nonce.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use gossamer_net_primitives::NetworkError;
use parking_lot::Mutex;

use crate::channel::Channel;

/// Short-lived map from session nonce to a channel whose outgoing dial
/// completed but whose handshake has not yet been verified.
///
/// Incoming channels probe this registry with the nonce echoed in the
/// peer's version message: a hit means this node dialed its own listening
/// socket. Shared across every session of one node so incoming sessions
/// observe outgoing pends. All operations mutate under one mutex; the
/// critical sections are a map touch each.
#[derive(Debug)]
pub struct PendingNonces<C> {
    channels: Mutex<HashMap<u64, Arc<C>>>,
}

impl<C> Default for PendingNonces<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PendingNonces<C> {
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Whether `nonce` belongs to a pending channel. Zero is the "not
    /// pending" sentinel and never matches.
    pub fn exists(&self, nonce: u64) -> bool {
        nonce != 0 && self.channels.lock().contains_key(&nonce)
    }

    pub fn len(&self) -> usize {
        self.channels.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Channel> PendingNonces<C> {
    /// Insert `channel` keyed by its current nonce. Fails on a zero nonce
    /// (the reserved sentinel) or a nonce already pending.
    pub fn store(&self, channel: &Arc<C>) -> Result<(), NetworkError> {
        let nonce = channel.nonce();
        if nonce == 0 {
            return Err(NetworkError::AcceptFailed);
        }
        match self.channels.lock().entry(nonce) {
            Entry::Occupied(_) => Err(NetworkError::AddressInUse),
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(channel));
                Ok(())
            }
        }
    }

    /// Remove the entry for `channel`'s current nonce.
    pub fn remove(&self, channel: &Arc<C>) -> Result<(), NetworkError> {
        self.channels
            .lock()
            .remove(&channel.nonce())
            .map(|_| ())
            .ok_or(NetworkError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gossamer_net_messages::VersionMessage;
    use gossamer_net_primitives::Authority;
    use std::sync::atomic::{AtomicU64, Ordering};

    use crate::stop::{StopDispatch, StopListener};

    struct StubChannel {
        nonce: AtomicU64,
        stop: StopDispatch,
    }

    impl StubChannel {
        fn with_nonce(nonce: u64) -> Arc<Self> {
            Arc::new(Self {
                nonce: AtomicU64::new(nonce),
                stop: StopDispatch::new(),
            })
        }
    }

    #[async_trait]
    impl Channel for StubChannel {
        async fn start(&self) -> Result<(), NetworkError> {
            Ok(())
        }

        fn stop(&self, reason: NetworkError) {
            self.stop.stop(reason);
        }

        fn subscribe_stop(&self) -> StopListener {
            self.stop.subscribe()
        }

        fn nonce(&self) -> u64 {
            self.nonce.load(Ordering::Relaxed)
        }

        fn set_nonce(&self, nonce: u64) {
            self.nonce.store(nonce, Ordering::Relaxed);
        }

        fn set_notify(&self, _notify: bool) {}

        fn version(&self) -> Option<VersionMessage> {
            None
        }

        fn authority(&self) -> Authority {
            "127.0.0.1:8333".parse().unwrap()
        }
    }

    #[test]
    fn test_store_and_exists() {
        let pending = PendingNonces::new();
        let channel = StubChannel::with_nonce(0x1234);

        assert!(!pending.exists(0x1234));
        pending.store(&channel).unwrap();
        assert!(pending.exists(0x1234));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_duplicate_nonce_rejected() {
        let pending = PendingNonces::new();
        let first = StubChannel::with_nonce(7);
        let second = StubChannel::with_nonce(7);

        pending.store(&first).unwrap();
        assert_eq!(pending.store(&second), Err(NetworkError::AddressInUse));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_zero_nonce_rejected() {
        let pending = PendingNonces::new();
        let channel = StubChannel::with_nonce(0);
        assert_eq!(pending.store(&channel), Err(NetworkError::AcceptFailed));
        assert!(!pending.exists(0));
    }

    #[test]
    fn test_remove_by_current_nonce() {
        let pending = PendingNonces::new();
        let channel = StubChannel::with_nonce(42);

        pending.store(&channel).unwrap();
        pending.remove(&channel).unwrap();
        assert!(pending.is_empty());
        assert_eq!(pending.remove(&channel), Err(NetworkError::NotFound));
    }
}
