use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur when parsing a metadata reference from hex.
#[derive(Debug, thiserror::Error)]
pub enum MetadataRefError {
    #[error("metadata reference is not valid hexadecimal")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("metadata reference must be exactly {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Number of raw bytes in a metadata reference.
pub const METADATA_REF_BYTES: usize = 32;

/// Opaque fixed-size reference to off-chain prospect metadata.
///
/// The engine never interprets, validates, or dereferences it; external
/// systems resolve it to actual content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MetadataRef(pub [u8; METADATA_REF_BYTES]);

impl MetadataRef {
    /// Derive a reference from arbitrary content bytes by hashing them with blake3.
    pub fn from_content(content: &[u8]) -> Self {
        MetadataRef(*blake3::hash(content).as_bytes())
    }

    /// Hex encoding of the reference bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a reference from its hex encoding.
    pub fn from_hex(value: &str) -> Result<Self, MetadataRefError> {
        let decoded = hex::decode(value)?;
        let actual = decoded.len();
        let bytes: [u8; METADATA_REF_BYTES] =
            decoded
                .try_into()
                .map_err(|_| MetadataRefError::InvalidLength {
                    expected: METADATA_REF_BYTES,
                    actual,
                })?;
        Ok(MetadataRef(bytes))
    }

    /// Raw byte view of the reference.
    pub fn as_bytes(&self) -> &[u8; METADATA_REF_BYTES] {
        &self.0
    }
}

impl fmt::Display for MetadataRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; METADATA_REF_BYTES]> for MetadataRef {
    fn from(value: [u8; METADATA_REF_BYTES]) -> Self {
        MetadataRef(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let reference = MetadataRef::from_content(b"ipfs://QmExample");
        let encoded = reference.to_hex();
        assert_eq!(encoded.len(), METADATA_REF_BYTES * 2);

        let decoded = MetadataRef::from_hex(&encoded).expect("hex should decode");
        assert_eq!(decoded, reference);
    }

    #[test]
    fn content_derivation_is_deterministic() {
        let a = MetadataRef::from_content(b"same content");
        let b = MetadataRef::from_content(b"same content");
        let c = MetadataRef::from_content(b"other content");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn wrong_length_rejected() {
        let err = MetadataRef::from_hex("abcd").unwrap_err();
        assert!(matches!(err, MetadataRefError::InvalidLength { .. }));
    }

    #[test]
    fn bad_hex_rejected() {
        let bad = "zz".repeat(METADATA_REF_BYTES);
        let err = MetadataRef::from_hex(&bad).unwrap_err();
        assert!(matches!(err, MetadataRefError::InvalidHex(_)));
    }
}
