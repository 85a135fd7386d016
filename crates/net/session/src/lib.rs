//! Session lifecycle engine and typed message demultiplexer.
//!
//! A [`Session`] admits freshly connected channels into the network: it
//! pends outgoing channels under a random nonce for loopback detection,
//! runs the version handshake, gates on the protocol floor, stores the
//! channel with the [`NetworkHost`], and wires stop propagation. The
//! [`MessageBus`] parses inbound payloads into typed messages and fans
//! them out to one-shot subscribers, with a uniform broadcast path for
//! terminal codes.
//!
//! Socket I/O, message framing, and address persistence live behind the
//! [`Channel`] and [`NetworkHost`] traits.

pub mod acceptor;
pub mod bus;
pub mod channel;
pub mod connector;
pub mod handshake;
pub mod host;
pub mod pending;
pub mod resource;
pub mod session;
pub mod settings;
pub mod stop;
pub mod subscriber;

pub use acceptor::Acceptor;
pub use bus::MessageBus;
pub use channel::Channel;
pub use connector::Connector;
pub use handshake::{Handshake, NullHandshake};
pub use host::NetworkHost;
pub use pending::PendingNonces;
pub use resource::{ResourceStack, SessionResource};
pub use session::{Departure, Session};
pub use settings::NetworkSettings;
pub use stop::{StopDispatch, StopListener};
pub use subscriber::Subscriber;
