//! Membership credential token for the Conclave governance engine
//!
//! Issues one unique, non-transferable credential per member identity and
//! gates issuance behind a single authorized caller fixed at construction
//! (normally the governance engine). The credential never calls back into
//! governance; whether an identity may hold more than one credential is the
//! caller's discipline, not enforced here.

pub mod credential;
pub mod errors;

pub use credential::MembershipCredential;
pub use errors::{CredentialError, Result};

/// Credential crate version (for API introspection)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
