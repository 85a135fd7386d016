//! Shared primitives for the gossamer network stack: boundary error codes,
//! peer endpoint identity, fixed-width hashes, and session nonce generation.

pub mod authority;
pub mod error;
pub mod hash;
pub mod nonce;

pub use authority::Authority;
pub use error::NetworkError;
pub use hash::Hash256;
pub use nonce::nonzero_random_nonce;
