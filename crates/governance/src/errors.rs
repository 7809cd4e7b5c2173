//! Error types for the governance engine

use conclave_credential::CredentialError;
use conclave_types::{Identity, ProspectId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GovernanceError {
    #[error("members already initialized")]
    AlreadyInitialized,

    #[error("invalid bootstrap list: {reason}")]
    InvalidBootstrap { reason: String },

    #[error("caller {caller} is not a member")]
    Unauthorized { caller: Identity },

    #[error("prospect not found: {prospect_id}")]
    NotFound { prospect_id: ProspectId },

    #[error("voting on prospect {prospect_id} has closed")]
    VotingClosed { prospect_id: ProspectId },

    #[error("voting on prospect {prospect_id} is still active")]
    VotingStillActive { prospect_id: ProspectId },

    #[error("{voter} already voted on prospect {prospect_id}")]
    AlreadyVoted {
        prospect_id: ProspectId,
        voter: Identity,
    },

    #[error("prospect {prospect_id} is already resolved")]
    AlreadyResolved { prospect_id: ProspectId },

    #[error("prospect {prospect_id} failed the vote ({for_votes} for, {against_votes} against)")]
    FailedVote {
        prospect_id: ProspectId,
        for_votes: u64,
        against_votes: u64,
    },

    #[error("candidate {candidate} is already a member")]
    AlreadyMember { candidate: Identity },

    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),
}

pub type Result<T> = std::result::Result<T, GovernanceError>;
