//! Prospect and vote receipt records

use conclave_types::{Identity, MetadataRef, ProspectId, Tick};
use serde::{Deserialize, Serialize};

/// A candidate identity proposed for membership, with a bounded voting window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prospect {
    /// Prospect id; strictly increasing, starts at 1
    pub id: ProspectId,
    /// Member who introduced the prospect
    pub referrer: Identity,
    /// Identity proposed for membership
    pub candidate: Identity,
    /// Opaque reference to off-chain metadata, uninterpreted by the engine
    pub metadata: MetadataRef,
    /// Logical clock value at creation
    pub created_at: Tick,
    /// Last tick at which votes are accepted (`created_at + VOTING_WINDOW`)
    pub deadline: Tick,
    /// Votes cast in favour
    pub for_votes: u64,
    /// Votes cast against
    pub against_votes: u64,
    /// Set exactly once, by the induct attempt that closes the prospect
    pub resolved: bool,
}

impl Prospect {
    /// Whether the cast votes carry a simple majority (`for > against`).
    pub fn has_majority(&self) -> bool {
        self.for_votes > self.against_votes
    }

    /// Derived lifecycle stage at logical time `now`.
    ///
    /// Never stored; `resolved` plus the frozen tallies fully determine it.
    pub fn stage(&self, now: Tick) -> ProspectStage {
        if self.resolved {
            if self.has_majority() {
                ProspectStage::Inducted
            } else {
                ProspectStage::Rejected
            }
        } else if now <= self.deadline {
            ProspectStage::Voting
        } else {
            ProspectStage::Closed
        }
    }
}

/// Lifecycle stage of a prospect, derived from its record and the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProspectStage {
    /// Voting window is open and the prospect is unresolved
    Voting,
    /// Window has passed but no induct attempt has resolved the prospect yet
    Closed,
    /// Resolved with a majority; the candidate was inducted
    Inducted,
    /// Resolved without a majority; terminal, cannot be retried
    Rejected,
}

/// Record of a single member's vote on a single prospect.
///
/// Created on first vote; never overwritten. A voter with no receipt reads
/// as the default `{voted: false, support: false}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    /// Whether this voter has cast a vote
    pub voted: bool,
    /// The vote cast, meaningful only when `voted` is true
    pub support: bool,
}
