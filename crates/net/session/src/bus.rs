//! Typed message demultiplexer.
//!
//! One [`Subscriber`] per known message kind, generated from a single kind
//! table so `start`/`stop`/`broadcast` iterate uniformly and [`load`]
//! dispatches by table lookup.
//!
//! [`load`]: MessageBus::load

use bytes::Bytes;
use gossamer_net_messages::{
    decode_payload, AddressMessage, AlertMessage, BlockMessage, Decode, FilterAddMessage,
    FilterClearMessage, FilterLoadMessage, GetAddressMessage, GetBlocksMessage, GetDataMessage,
    GetHeadersMessage, HeadersMessage, InventoryMessage, MemoryPoolMessage, MerkleBlockMessage,
    MessageKind, NotFoundMessage, PingMessage, PongMessage, RejectMessage, Transaction,
    VerackMessage, VersionMessage,
};
use gossamer_net_primitives::NetworkError;
use tracing::debug;

use crate::subscriber::Subscriber;

fn parse<M: Decode + Clone>(
    subscriber: &Subscriber<M>,
    payload: Bytes,
) -> Result<M, NetworkError> {
    decode_payload(payload).map_err(|error| {
        debug!(label = subscriber.label(), %error, "payload failed to parse");
        NetworkError::BadStream
    })
}

/// Multi-consumer fan-out: every registered handler gets a copy.
fn relay_dispatch<M: Decode + Clone>(
    subscriber: &Subscriber<M>,
    payload: Bytes,
) -> Result<(), NetworkError> {
    let message = parse(subscriber, payload)?;
    subscriber.relay(message);
    Ok(())
}

/// Single-consumer delivery to the head handler, for kinds where the
/// consumer paces the producer.
fn handle_dispatch<M: Decode + Clone>(
    subscriber: &Subscriber<M>,
    payload: Bytes,
) -> Result<(), NetworkError> {
    let message = parse(subscriber, payload)?;
    subscriber.handle(message);
    Ok(())
}

macro_rules! message_bus {
    ($(($field:ident, $kind:ident, $message:ty, $dispatch:ident)),+ $(,)?) => {
        /// One typed subscriber per known message kind.
        #[derive(Debug)]
        pub struct MessageBus {
            $($field: Subscriber<$message>,)+
        }

        impl Default for MessageBus {
            fn default() -> Self {
                Self::new()
            }
        }

        impl MessageBus {
            /// A new bus. Every subscriber starts stopped; call
            /// [`start`](Self::start) to open delivery.
            pub fn new() -> Self {
                Self {
                    $($field: Subscriber::new(concat!(stringify!($field), "_sub")),)+
                }
            }

            /// Open every per-kind subscriber for delivery.
            pub fn start(&self) {
                $(self.$field.start();)+
            }

            /// Relay the terminal code to every kind's subscribers exactly
            /// once. No subsequent message is ever delivered.
            pub fn broadcast(&self, reason: NetworkError) {
                $(self.$field.stop(reason);)+
            }

            /// Stop delivery; equivalent to broadcasting the terminal code.
            pub fn stop(&self, reason: NetworkError) {
                self.broadcast(reason);
            }

            /// Parse one message of `kind` from `payload` and dispatch it
            /// to the kind's subscribers. An unknown kind returns
            /// [`NetworkError::NotFound`]; a parse failure returns the
            /// parser's code without touching any subscriber.
            pub fn load(&self, kind: MessageKind, payload: Bytes) -> Result<(), NetworkError> {
                match kind {
                    $(MessageKind::$kind => $dispatch(&self.$field, payload),)+
                    MessageKind::Unknown => Err(NetworkError::NotFound),
                }
            }

            $(
                #[doc = concat!("The `", stringify!($field), "` subscriber.")]
                pub fn $field(&self) -> &Subscriber<$message> {
                    &self.$field
                }
            )+
        }
    };
}

message_bus!(
    (address, Address, AddressMessage, relay_dispatch),
    (alert, Alert, AlertMessage, relay_dispatch),
    (block, Block, BlockMessage, handle_dispatch),
    (filter_add, FilterAdd, FilterAddMessage, relay_dispatch),
    (filter_clear, FilterClear, FilterClearMessage, relay_dispatch),
    (filter_load, FilterLoad, FilterLoadMessage, relay_dispatch),
    (get_address, GetAddress, GetAddressMessage, relay_dispatch),
    (get_blocks, GetBlocks, GetBlocksMessage, relay_dispatch),
    (get_data, GetData, GetDataMessage, relay_dispatch),
    (get_headers, GetHeaders, GetHeadersMessage, relay_dispatch),
    (headers, Headers, HeadersMessage, relay_dispatch),
    (inventory, Inventory, InventoryMessage, relay_dispatch),
    (memory_pool, MemoryPool, MemoryPoolMessage, relay_dispatch),
    (merkle_block, MerkleBlock, MerkleBlockMessage, relay_dispatch),
    (not_found, NotFound, NotFoundMessage, relay_dispatch),
    (ping, Ping, PingMessage, relay_dispatch),
    (pong, Pong, PongMessage, relay_dispatch),
    (reject, Reject, RejectMessage, relay_dispatch),
    (transaction, Transaction, Transaction, relay_dispatch),
    (verack, Verack, VerackMessage, relay_dispatch),
    (version, Version, VersionMessage, relay_dispatch),
);
