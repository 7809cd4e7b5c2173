use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur when parsing a Conclave identity string.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity must start with 'g'")]
    InvalidPrefix,
    #[error("identity must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("identity payload is not valid hexadecimal")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("identity payload must be exactly 32 bytes")]
    InvalidPayloadLength,
}

/// Number of raw bytes contained in an identity.
pub const IDENTITY_BYTES: usize = 32;
/// Expected string length of an encoded identity (prefix + 64 hex chars).
pub const IDENTITY_STRING_LENGTH: usize = 1 + IDENTITY_BYTES * 2;

/// Encode a 32-byte principal identifier into the human readable Conclave format.
///
/// The encoded identity always begins with the character `g` followed by the
/// hexadecimal representation of the raw bytes.
pub fn encode_identity(bytes: &[u8; IDENTITY_BYTES]) -> String {
    let mut encoded = String::with_capacity(IDENTITY_STRING_LENGTH);
    encoded.push('g');
    encoded.push_str(&hex::encode(bytes));
    encoded
}

/// Attempt to decode a human readable Conclave identity string into the raw bytes.
pub fn decode_identity(identity: &str) -> Result<[u8; IDENTITY_BYTES], IdentityError> {
    if !identity.starts_with('g') {
        return Err(IdentityError::InvalidPrefix);
    }

    if identity.len() != IDENTITY_STRING_LENGTH {
        return Err(IdentityError::InvalidLength {
            expected: IDENTITY_STRING_LENGTH,
            actual: identity.len(),
        });
    }

    let payload = &identity[1..];
    let decoded = hex::decode(payload)?;

    let bytes: [u8; IDENTITY_BYTES] = decoded
        .try_into()
        .map_err(|_| IdentityError::InvalidPayloadLength)?;

    Ok(bytes)
}

/// Check whether the provided string is a valid Conclave identity.
pub fn is_valid_identity(identity: &str) -> bool {
    decode_identity(identity).is_ok()
}

/// Opaque principal identifier for members, candidates, and the engine itself.
///
/// Serialises as its string encoding so identities remain valid JSON map
/// keys; orders and hashes over the raw bytes so they can key `BTreeMap`s
/// deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(pub [u8; IDENTITY_BYTES]);

impl Identity {
    /// Derive an identity from arbitrary content by hashing it with blake3.
    pub fn from_content(content: &[u8]) -> Self {
        Identity(*blake3::hash(content).as_bytes())
    }

    /// Raw byte view of the identity.
    pub fn as_bytes(&self) -> &[u8; IDENTITY_BYTES] {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_identity(&self.0))
    }
}

impl From<[u8; IDENTITY_BYTES]> for Identity {
    fn from(value: [u8; IDENTITY_BYTES]) -> Self {
        Identity(value)
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        encode_identity(&value.0)
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        decode_identity(&value).map(Identity)
    }
}
