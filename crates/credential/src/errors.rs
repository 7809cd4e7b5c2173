//! Error types for the membership credential

use conclave_types::{CredentialId, Identity};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("caller {caller} is not the credential authority")]
    Unauthorized { caller: Identity },

    #[error("credential not found: {credential_id}")]
    NotFound { credential_id: CredentialId },
}

pub type Result<T> = std::result::Result<T, CredentialError>;
