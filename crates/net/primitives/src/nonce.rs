//! Session nonce generation.

/// Draw a nonzero 64-bit nonce.
///
/// Zero is the reserved "not pending" sentinel, so it is never returned.
/// Collisions with peer-chosen nonces are negligible at 64 bits.
pub fn nonzero_random_nonce() -> u64 {
    loop {
        let nonce = rand::random::<u64>();
        if nonce != 0 {
            return nonce;
        }
    }
}
