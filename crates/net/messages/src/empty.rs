//! Messages whose payload is empty; the command alone carries the meaning.

use crate::reader::{Decode, DecodeError, WireReader};

macro_rules! empty_message {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Decode for $name {
            fn decode(_reader: &mut WireReader) -> Result<Self, DecodeError> {
                Ok(Self)
            }
        }
    };
}

empty_message!(
    /// The `verack` payload, acknowledging a `version`.
    VerackMessage
);
empty_message!(
    /// The `getaddr` payload, requesting known peers.
    GetAddressMessage
);
empty_message!(
    /// The `mempool` payload, requesting the peer's unconfirmed set.
    MemoryPoolMessage
);
empty_message!(
    /// The `filterclear` payload, dropping the installed bloom filter.
    FilterClearMessage
);
