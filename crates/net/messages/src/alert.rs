//! The `alert` payload.

use crate::reader::{Decode, DecodeError, WireReader};

const MAX_ALERT_COMPONENT: u64 = 32_768;

/// A signed network alert. The inner payload stays opaque here; alert
/// interpretation is an application concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}

impl Decode for AlertMessage {
    fn decode(reader: &mut WireReader) -> Result<Self, DecodeError> {
        let payload = reader.read_var_bytes(MAX_ALERT_COMPONENT, "alert payload")?;
        let signature = reader.read_var_bytes(MAX_ALERT_COMPONENT, "alert signature")?;
        Ok(Self { payload, signature })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_payload;
    use bytes::Bytes;

    #[test]
    fn test_decode_alert() {
        let mut bytes = vec![0x03, 1, 2, 3];
        bytes.push(0x02);
        bytes.extend_from_slice(&[9, 9]);
        let alert: AlertMessage = decode_payload(Bytes::from(bytes)).unwrap();
        assert_eq!(alert.payload, vec![1, 2, 3]);
        assert_eq!(alert.signature, vec![9, 9]);
    }

    #[test]
    fn test_missing_signature_fails() {
        let bytes = vec![0x03, 1, 2, 3];
        assert_eq!(
            decode_payload::<AlertMessage>(Bytes::from(bytes)),
            Err(DecodeError::UnexpectedEnd)
        );
    }
}
