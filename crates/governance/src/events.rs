//! Externally observable governance notifications
//!
//! The engine appends one event per state transition to an append-only log,
//! analogous to an on-chain event log.

use conclave_types::{Identity, ProspectId};
use serde::{Deserialize, Serialize};

/// Append-only notification emitted by the governance engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceEvent {
    /// A member introduced a new prospect
    ProspectIntroduced {
        prospect_id: ProspectId,
        candidate: Identity,
    },
    /// A member cast a vote on a prospect
    VoteCast {
        prospect_id: ProspectId,
        voter: Identity,
    },
    /// A prospect passed its vote and the candidate became a member
    MemberInducted { candidate: Identity },
}
