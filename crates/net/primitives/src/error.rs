//! Symbolic error codes crossing the network core's boundaries.

use thiserror::Error;

/// Error codes surfaced by the session engine, the message bus, and the
/// external collaborators (channel, handshake, host).
///
/// Success is the `Ok` arm of `Result`; everything here is a terminal code.
/// Codes are deliberately coarse: detail stays at the debug log site, the
/// code is what crosses the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NetworkError {
    /// The operation was invalid for the object's current state, e.g.
    /// starting a session that is already running.
    #[error("operation failed")]
    OperationFailed,

    /// The service stopped before or during the operation.
    #[error("service stopped")]
    ServiceStopped,

    /// The connection was not accepted: loopback detection, a peer below
    /// the minimum protocol version, or a listener-side accept fault.
    #[error("accept failed")]
    AcceptFailed,

    /// The referenced object does not exist (unknown message kind, absent
    /// registry entry).
    #[error("object does not exist")]
    NotFound,

    /// A wire payload could not be parsed.
    #[error("bad data stream")]
    BadStream,

    /// The channel timed out during connect, handshake, or inactivity.
    #[error("channel timed out")]
    ChannelTimeout,

    /// The channel was stopped by its peer or by local policy.
    #[error("channel stopped")]
    ChannelStopped,

    /// A duplicate entry: storing a channel or nonce that is already held.
    #[error("address already in use")]
    AddressInUse,

    /// The peer address is blacklisted.
    #[error("address blocked")]
    AddressBlocked,
}
