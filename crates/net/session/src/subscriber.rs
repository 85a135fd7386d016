//! One-shot typed completion lists.

use gossamer_net_primitives::NetworkError;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::trace;

#[derive(Debug)]
enum SubscriberState<M> {
    Open(Vec<oneshot::Sender<Result<M, NetworkError>>>),
    Stopped(NetworkError),
}

/// A one-shot list of completion handlers for messages of kind `M`.
///
/// Constructed stopped; [`start`](Self::start) opens it for delivery. Each
/// subscription is fulfilled at most once, with either a message or the
/// terminal code. After [`stop`](Self::stop) the subscriber is frozen: new
/// subscriptions resolve immediately with the terminal code and no message
/// is ever delivered again.
#[derive(Debug)]
pub struct Subscriber<M> {
    label: &'static str,
    state: Mutex<SubscriberState<M>>,
}

impl<M: Clone> Subscriber<M> {
    /// A new, stopped subscriber. `label` tags trace output per kind.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            state: Mutex::new(SubscriberState::Stopped(NetworkError::ServiceStopped)),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Open for delivery. A no-op when already open.
    pub fn start(&self) {
        let mut state = self.state.lock();
        if let SubscriberState::Stopped(_) = &*state {
            *state = SubscriberState::Open(Vec::new());
        }
    }

    /// Register one completion. Resolves with the next delivery for this
    /// kind, or immediately with the terminal code when stopped.
    pub fn subscribe(&self) -> oneshot::Receiver<Result<M, NetworkError>> {
        let (tx, rx) = oneshot::channel();
        match &mut *self.state.lock() {
            SubscriberState::Open(pending) => pending.push(tx),
            SubscriberState::Stopped(reason) => {
                let _ = tx.send(Err(*reason));
            }
        }
        rx
    }

    /// Deliver `message` to every registered handler, clearing the list
    /// (one-shot fan-out). Dropped silently when stopped.
    pub fn relay(&self, message: M) {
        let pending = match &mut *self.state.lock() {
            SubscriberState::Open(pending) => std::mem::take(pending),
            SubscriberState::Stopped(_) => return,
        };
        trace!(label = self.label, handlers = pending.len(), "relay");
        for handler in pending {
            let _ = handler.send(Ok(message.clone()));
        }
    }

    /// Deliver `message` to the head handler only, leaving the rest
    /// registered. Single-consumer back-pressure for heavyweight kinds.
    pub fn handle(&self, message: M) {
        let head = match &mut *self.state.lock() {
            SubscriberState::Open(pending) if !pending.is_empty() => pending.remove(0),
            _ => return,
        };
        trace!(label = self.label, "handle");
        let _ = head.send(Ok(message));
    }

    /// Relay the terminal code to every registered handler exactly once
    /// and freeze the subscriber. A second stop keeps the first code.
    pub fn stop(&self, reason: NetworkError) {
        let pending = {
            let mut state = self.state.lock();
            match &mut *state {
                SubscriberState::Stopped(_) => return,
                SubscriberState::Open(pending) => {
                    let pending = std::mem::take(pending);
                    *state = SubscriberState::Stopped(reason);
                    pending
                }
            }
        };
        trace!(label = self.label, handlers = pending.len(), %reason, "stop");
        for handler in pending {
            let _ = handler.send(Err(reason));
        }
    }

    /// Handlers currently registered.
    pub fn len(&self) -> usize {
        match &*self.state.lock() {
            SubscriberState::Open(pending) => pending.len(),
            SubscriberState::Stopped(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_relay_fans_out_and_clears() {
        let subscriber = Subscriber::new("ping_sub");
        subscriber.start();

        let first = subscriber.subscribe();
        let second = subscriber.subscribe();
        assert_eq!(subscriber.len(), 2);

        subscriber.relay(7u64);
        assert_eq!(first.await.unwrap(), Ok(7));
        assert_eq!(second.await.unwrap(), Ok(7));
        assert!(subscriber.is_empty());
    }

    #[tokio::test]
    async fn test_handle_delivers_to_head_only() {
        let subscriber = Subscriber::new("block_sub");
        subscriber.start();

        let head = subscriber.subscribe();
        let _tail = subscriber.subscribe();

        subscriber.handle(1u64);
        assert_eq!(head.await.unwrap(), Ok(1));
        assert_eq!(subscriber.len(), 1);
    }

    #[tokio::test]
    async fn test_stop_delivers_terminal_code_once() {
        let subscriber = Subscriber::new("inv_sub");
        subscriber.start();
        let pending = subscriber.subscribe();

        subscriber.stop(NetworkError::ServiceStopped);
        assert_eq!(pending.await.unwrap(), Err(NetworkError::ServiceStopped));

        // Frozen: later subscriptions resolve immediately, relays drop.
        subscriber.relay(9u64);
        let late = subscriber.subscribe();
        assert_eq!(late.await.unwrap(), Err(NetworkError::ServiceStopped));
    }

    #[tokio::test]
    async fn test_new_subscriber_is_stopped_until_started() {
        let subscriber = Subscriber::<u64>::new("addr_sub");
        let early = subscriber.subscribe();
        assert_eq!(early.await.unwrap(), Err(NetworkError::ServiceStopped));

        subscriber.start();
        let open = subscriber.subscribe();
        subscriber.relay(3);
        assert_eq!(open.await.unwrap(), Ok(3));
    }

    #[tokio::test]
    async fn test_second_stop_keeps_first_code() {
        let subscriber = Subscriber::<u64>::new("tx_sub");
        subscriber.start();
        subscriber.stop(NetworkError::ChannelTimeout);
        subscriber.stop(NetworkError::AcceptFailed);

        let late = subscriber.subscribe();
        assert_eq!(late.await.unwrap(), Err(NetworkError::ChannelTimeout));
    }
}
