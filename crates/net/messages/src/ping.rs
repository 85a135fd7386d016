//! Keepalive payloads: `ping` and `pong`.

use crate::reader::{Decode, DecodeError, WireReader};

macro_rules! nonce_message {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub nonce: u64,
        }

        impl Decode for $name {
            fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
                Ok(Self {
                    nonce: reader.read_u64_le()?,
                })
            }
        }
    };
}

nonce_message!(
    /// The `ping` payload.
    PingMessage
);
nonce_message!(
    /// The `pong` payload, echoing the ping's nonce.
    PongMessage
);
