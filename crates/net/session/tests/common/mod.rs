//! Test doubles for the channel, host, and handshake boundaries.
#![allow(dead_code, unreachable_pub)]

use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gossamer_net_messages::{NetworkAddress, VersionMessage};
use gossamer_net_primitives::{Authority, NetworkError};
use gossamer_net_session::{Channel, Handshake, NetworkHost, StopDispatch, StopListener};
use parking_lot::Mutex;
use tokio::sync::Notify;

pub fn version_message(value: u32, nonce: u64) -> VersionMessage {
    let address = NetworkAddress {
        services: 1,
        ip: Ipv4Addr::LOCALHOST.to_ipv6_mapped(),
        port: 8333,
    };
    VersionMessage {
        value,
        services: 1,
        timestamp: 1_415_000_000,
        address_receiver: address,
        address_sender: address,
        nonce,
        user_agent: "/test/".to_string(),
        start_height: 0,
        relay: true,
    }
}

/// Poll `condition` until it holds or the test times out.
pub async fn wait_for(mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

pub struct MockChannel {
    authority: Authority,
    nonce: AtomicU64,
    notify: AtomicBool,
    starts: AtomicUsize,
    start_result: Mutex<Result<(), NetworkError>>,
    version: Mutex<Option<VersionMessage>>,
    stop: StopDispatch,
}

impl MockChannel {
    pub fn new(authority: &str) -> Arc<Self> {
        Arc::new(Self {
            authority: authority.parse().expect("test authority"),
            nonce: AtomicU64::new(0),
            notify: AtomicBool::new(false),
            starts: AtomicUsize::new(0),
            start_result: Mutex::new(Ok(())),
            version: Mutex::new(None),
            stop: StopDispatch::new(),
        })
    }

    pub fn with_start_error(authority: &str, reason: NetworkError) -> Arc<Self> {
        let channel = Self::new(authority);
        *channel.start_result.lock() = Err(reason);
        channel
    }

    pub fn install_version(&self, version: VersionMessage) {
        *self.version.lock() = Some(version);
    }

    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn notify(&self) -> bool {
        self.notify.load(Ordering::SeqCst)
    }

    pub fn stopped(&self) -> bool {
        self.stop.is_stopped()
    }
}

#[async_trait]
impl Channel for MockChannel {
    async fn start(&self) -> Result<(), NetworkError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        *self.start_result.lock()
    }

    fn stop(&self, reason: NetworkError) {
        self.stop.stop(reason);
    }

    fn subscribe_stop(&self) -> StopListener {
        self.stop.subscribe()
    }

    fn nonce(&self) -> u64 {
        self.nonce.load(Ordering::SeqCst)
    }

    fn set_nonce(&self, nonce: u64) {
        self.nonce.store(nonce, Ordering::SeqCst);
    }

    fn set_notify(&self, notify: bool) {
        self.notify.store(notify, Ordering::SeqCst);
    }

    fn version(&self) -> Option<VersionMessage> {
        self.version.lock().clone()
    }

    fn authority(&self) -> Authority {
        self.authority
    }
}

pub struct MockHost {
    stop: StopDispatch,
    stored: Mutex<Vec<Arc<MockChannel>>>,
    removed: Mutex<Vec<Authority>>,
    store_result: Mutex<Result<(), NetworkError>>,
    addresses: Mutex<Vec<Authority>>,
}

impl MockHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            stop: StopDispatch::new(),
            stored: Mutex::new(Vec::new()),
            removed: Mutex::new(Vec::new()),
            store_result: Mutex::new(Ok(())),
            addresses: Mutex::new(Vec::new()),
        })
    }

    pub fn set_store_error(&self, reason: NetworkError) {
        *self.store_result.lock() = Err(reason);
    }

    pub fn add_address(&self, authority: Authority) {
        self.addresses.lock().push(authority);
    }

    /// Fire the global stop signal.
    pub fn stop_network(&self, reason: NetworkError) {
        self.stop.stop(reason);
    }

    pub fn stored_count(&self) -> usize {
        self.stored.lock().len()
    }

    pub fn removed(&self) -> Vec<Authority> {
        self.removed.lock().clone()
    }
}

#[async_trait]
impl NetworkHost<MockChannel> for MockHost {
    fn subscribe_stop(&self) -> StopListener {
        self.stop.subscribe()
    }

    async fn address_count(&self) -> usize {
        self.addresses.lock().len()
    }

    async fn fetch_address(&self) -> Result<Authority, NetworkError> {
        self.addresses
            .lock()
            .first()
            .copied()
            .ok_or(NetworkError::NotFound)
    }

    async fn connected_count(&self) -> usize {
        self.stored.lock().len()
    }

    async fn store(&self, channel: Arc<MockChannel>) -> Result<(), NetworkError> {
        (*self.store_result.lock())?;
        self.stored.lock().push(channel);
        Ok(())
    }

    async fn remove(&self, channel: &Arc<MockChannel>) -> Result<(), NetworkError> {
        let mut stored = self.stored.lock();
        let index = stored
            .iter()
            .position(|held| Arc::ptr_eq(held, channel))
            .ok_or(NetworkError::NotFound)?;
        stored.remove(index);
        self.removed.lock().push(channel.authority());
        Ok(())
    }
}

/// A handshake double: optionally parks until released, then installs a
/// version message on the channel and reports the configured outcome.
pub struct TestHandshake {
    version: Option<VersionMessage>,
    result: Result<(), NetworkError>,
    barrier: Option<Arc<Notify>>,
    observed_nonces: Mutex<Vec<u64>>,
}

impl TestHandshake {
    pub fn succeeding(version: VersionMessage) -> Arc<Self> {
        Arc::new(Self {
            version: Some(version),
            result: Ok(()),
            barrier: None,
            observed_nonces: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(reason: NetworkError) -> Arc<Self> {
        Arc::new(Self {
            version: None,
            result: Err(reason),
            barrier: None,
            observed_nonces: Mutex::new(Vec::new()),
        })
    }

    /// Like [`succeeding`](Self::succeeding), but `perform` parks until
    /// the returned notify handle is signalled.
    pub fn parked(version: VersionMessage) -> (Arc<Self>, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        let handshake = Arc::new(Self {
            version: Some(version),
            result: Ok(()),
            barrier: Some(Arc::clone(&release)),
            observed_nonces: Mutex::new(Vec::new()),
        });
        (handshake, release)
    }

    /// Channel nonces observed while the handshake ran, i.e. while the
    /// channel was pending.
    pub fn observed_nonces(&self) -> Vec<u64> {
        self.observed_nonces.lock().clone()
    }
}

#[async_trait]
impl Handshake<MockChannel> for TestHandshake {
    async fn perform(&self, channel: &Arc<MockChannel>) -> Result<(), NetworkError> {
        self.observed_nonces.lock().push(channel.nonce());
        if let Some(barrier) = &self.barrier {
            barrier.notified().await;
        }
        if let Some(version) = &self.version {
            channel.install_version(version.clone());
        }
        self.result
    }
}
