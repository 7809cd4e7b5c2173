//! Shared types for the Conclave governance engine
//!
//! Provides the opaque principal [`Identity`], the uninterpreted
//! [`MetadataRef`] a prospect points at, and the scalar newtypes
//! ([`ProspectId`], [`CredentialId`], [`Tick`]) the engine counts and
//! measures with. Everything here is serde-serializable and deterministic:
//! identities order and hash stably so they can key `BTreeMap`s, and the
//! logical clock is a plain counter supplied by the caller, never sampled
//! from wall time.

pub mod identity;
pub mod metadata;
pub mod scalars;

pub use identity::{
    decode_identity, encode_identity, is_valid_identity, Identity, IdentityError, IDENTITY_BYTES,
    IDENTITY_STRING_LENGTH,
};
pub use metadata::{MetadataRef, MetadataRefError, METADATA_REF_BYTES};
pub use scalars::{CredentialId, ProspectId, Tick};

/// Types crate version (for API introspection)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
