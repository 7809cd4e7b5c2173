//! Governance engine implementation
//!
//! Owns the member set, prospect registry, vote receipts, and event log, and
//! drives the full prospect lifecycle. All state mutation goes through the
//! engine's operations; on successful induction the engine mints through its
//! own [`MembershipCredential`], wired in at construction as the sole mint
//! authority.

use crate::errors::*;
use crate::events::GovernanceEvent;
use crate::prospect::{Prospect, ProspectStage, VoteReceipt};
use crate::VOTING_WINDOW;
use conclave_credential::MembershipCredential;
use conclave_types::{Identity, MetadataRef, ProspectId, Tick};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Point-in-time summary of the engine's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceStats {
    pub total_prospects: usize,
    pub voting: usize,
    pub closed: usize,
    pub inducted: usize,
    pub rejected: usize,
    pub member_count: usize,
    pub credentials_issued: u64,
}

/// Membership governance engine.
///
/// Methods take `&mut self`; processing is strictly sequential and each call
/// either commits its full effect or aborts with no observable mutation.
/// Concurrent hosting goes through [`SharedGovernance`].
///
/// [`SharedGovernance`]: crate::SharedGovernance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceEngine {
    /// The engine's own principal; the credential's mint authority
    identity: Identity,
    /// Set by the one-time bootstrap
    initialized: bool,
    /// Ordered bootstrap list, retained verbatim for the query
    init_members: Vec<Identity>,
    /// Current member set
    members: BTreeSet<Identity>,
    /// Credential ledger owned by this engine
    credential: MembershipCredential,
    /// Next prospect id to assign; ids start at 1
    next_prospect_id: u64,
    /// Prospect id → prospect record
    prospects: BTreeMap<ProspectId, Prospect>,
    /// Prospect id → voter → receipt
    receipts: BTreeMap<ProspectId, BTreeMap<Identity, VoteReceipt>>,
    /// Append-only event log
    events: Vec<GovernanceEvent>,
}

impl GovernanceEngine {
    /// Create an uninitialized engine owning a fresh credential ledger whose
    /// sole mint authority is the engine itself.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            initialized: false,
            init_members: Vec::new(),
            members: BTreeSet::new(),
            credential: MembershipCredential::new(identity),
            next_prospect_id: 1,
            prospects: BTreeMap::new(),
            receipts: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// One-time bootstrap: seed the initial cohort.
    ///
    /// Each identity is added to the member set and minted a credential in
    /// list order, so the owner at index `i` receives credential id `i + 1`.
    /// Fails atomically with `AlreadyInitialized` on any later call, and
    /// with `InvalidBootstrap` if the list is empty or contains duplicates.
    pub fn initialize_members(&mut self, initial_owners: &[Identity]) -> Result<()> {
        if self.initialized {
            return Err(GovernanceError::AlreadyInitialized);
        }

        if initial_owners.is_empty() {
            return Err(GovernanceError::InvalidBootstrap {
                reason: "initial cohort is empty".to_string(),
            });
        }

        let distinct: BTreeSet<&Identity> = initial_owners.iter().collect();
        if distinct.len() != initial_owners.len() {
            return Err(GovernanceError::InvalidBootstrap {
                reason: "initial cohort contains duplicate identities".to_string(),
            });
        }

        let authority = self.identity;
        for owner in initial_owners {
            self.members.insert(*owner);
            self.credential.mint(&authority, owner)?;
        }
        self.init_members = initial_owners.to_vec();
        self.initialized = true;

        info!(
            target: "governance",
            "Initialized {} founding members",
            initial_owners.len()
        );

        Ok(())
    }

    /// Introduce a candidate for membership.
    ///
    /// Only members may introduce. Allocates the next prospect id, opens a
    /// voting window of [`VOTING_WINDOW`] ticks starting at `now`, and logs
    /// `ProspectIntroduced`. A candidate may be reintroduced after a failed
    /// attempt; no uniqueness constraint across prospects.
    pub fn introduce_prospect(
        &mut self,
        caller: &Identity,
        candidate: Identity,
        metadata: MetadataRef,
        now: Tick,
    ) -> Result<ProspectId> {
        if !self.members.contains(caller) {
            return Err(GovernanceError::Unauthorized { caller: *caller });
        }

        let id = ProspectId(self.next_prospect_id);
        self.next_prospect_id += 1;

        let prospect = Prospect {
            id,
            referrer: *caller,
            candidate,
            metadata,
            created_at: now,
            deadline: now.advance(VOTING_WINDOW),
            for_votes: 0,
            against_votes: 0,
            resolved: false,
        };
        self.prospects.insert(id, prospect);

        info!(
            target: "governance",
            "Prospect {} introduced: candidate {} referred by {}",
            id,
            candidate,
            caller
        );
        self.events.push(GovernanceEvent::ProspectIntroduced {
            prospect_id: id,
            candidate,
        });

        Ok(id)
    }

    /// Cast a vote on an open prospect.
    ///
    /// Preconditions, first failing check wins: caller is a member; the
    /// prospect exists; the window is still open (`now <= deadline`); the
    /// caller has not voted on this prospect before. The vote is final.
    pub fn vote_on_prospect(
        &mut self,
        caller: &Identity,
        prospect_id: ProspectId,
        support: bool,
        now: Tick,
    ) -> Result<()> {
        if !self.members.contains(caller) {
            return Err(GovernanceError::Unauthorized { caller: *caller });
        }

        let prospect = self
            .prospects
            .get_mut(&prospect_id)
            .ok_or(GovernanceError::NotFound { prospect_id })?;

        if now > prospect.deadline {
            return Err(GovernanceError::VotingClosed { prospect_id });
        }

        let receipts = self.receipts.entry(prospect_id).or_default();
        if receipts.contains_key(caller) {
            return Err(GovernanceError::AlreadyVoted {
                prospect_id,
                voter: *caller,
            });
        }

        receipts.insert(
            *caller,
            VoteReceipt {
                voted: true,
                support,
            },
        );
        if support {
            prospect.for_votes += 1;
        } else {
            prospect.against_votes += 1;
        }

        info!(
            target: "governance",
            "Vote cast on prospect {} by {}: now {} for, {} against",
            prospect_id,
            caller,
            prospect.for_votes,
            prospect.against_votes
        );
        self.events.push(GovernanceEvent::VoteCast {
            prospect_id,
            voter: *caller,
        });

        Ok(())
    }

    /// Resolve a prospect after its voting window has closed.
    ///
    /// Permissionless: any caller may trigger induction once the conditions
    /// are met. On a simple majority (`for > against`) the candidate is
    /// minted a credential and joins the member set; otherwise the call
    /// fails with `FailedVote` and the prospect is finalized as part of the
    /// failure and cannot be retried. A candidate who is already a member
    /// finalizes the same way with `AlreadyMember`.
    pub fn induct_member(&mut self, prospect_id: ProspectId, now: Tick) -> Result<Identity> {
        let prospect = self
            .prospects
            .get_mut(&prospect_id)
            .ok_or(GovernanceError::NotFound { prospect_id })?;

        if prospect.resolved {
            return Err(GovernanceError::AlreadyResolved { prospect_id });
        }

        if now <= prospect.deadline {
            return Err(GovernanceError::VotingStillActive { prospect_id });
        }

        if !prospect.has_majority() {
            prospect.resolved = true;
            info!(
                target: "governance",
                "Prospect {} rejected: {} for, {} against",
                prospect_id,
                prospect.for_votes,
                prospect.against_votes
            );
            return Err(GovernanceError::FailedVote {
                prospect_id,
                for_votes: prospect.for_votes,
                against_votes: prospect.against_votes,
            });
        }

        let candidate = prospect.candidate;
        if self.members.contains(&candidate) {
            prospect.resolved = true;
            return Err(GovernanceError::AlreadyMember { candidate });
        }

        // Minting is the only fallible effect; perform it before any other
        // mutation so the commit stays all-or-nothing.
        let authority = self.identity;
        self.credential.mint(&authority, &candidate)?;
        self.members.insert(candidate);
        prospect.resolved = true;

        info!(
            target: "governance",
            "Prospect {} inducted: {} is now a member",
            prospect_id,
            candidate
        );
        self.events.push(GovernanceEvent::MemberInducted { candidate });

        Ok(candidate)
    }

    /// Ordered bootstrap list consumed by [`Self::initialize_members`].
    pub fn init_members(&self) -> &[Identity] {
        &self.init_members
    }

    /// The credential ledger this engine mints through.
    pub fn governance_token(&self) -> &MembershipCredential {
        &self.credential
    }

    /// Metadata reference of a prospect.
    pub fn prospect_metadata(&self, prospect_id: ProspectId) -> Result<MetadataRef> {
        self.prospect(prospect_id).map(|p| p.metadata)
    }

    /// Current `(for, against)` tallies of a prospect.
    pub fn prospect_votes(&self, prospect_id: ProspectId) -> Result<(u64, u64)> {
        self.prospect(prospect_id)
            .map(|p| (p.for_votes, p.against_votes))
    }

    /// A voter's receipt on a prospect.
    ///
    /// A voter who never voted reads as the default receipt; an unknown
    /// prospect id still fails `NotFound`.
    pub fn prospect_receipt(
        &self,
        prospect_id: ProspectId,
        voter: &Identity,
    ) -> Result<VoteReceipt> {
        if !self.prospects.contains_key(&prospect_id) {
            return Err(GovernanceError::NotFound { prospect_id });
        }
        Ok(self
            .receipts
            .get(&prospect_id)
            .and_then(|receipts| receipts.get(voter))
            .copied()
            .unwrap_or_default())
    }

    /// Full prospect record.
    pub fn prospect(&self, prospect_id: ProspectId) -> Result<&Prospect> {
        self.prospects
            .get(&prospect_id)
            .ok_or(GovernanceError::NotFound { prospect_id })
    }

    /// Whether `identity` currently holds membership.
    pub fn is_member(&self, identity: &Identity) -> bool {
        self.members.contains(identity)
    }

    /// Current number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Whether the one-time bootstrap has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The engine's own principal identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Append-only event log, oldest first.
    pub fn events(&self) -> &[GovernanceEvent] {
        &self.events
    }

    /// Summary statistics at logical time `now`.
    pub fn stats(&self, now: Tick) -> GovernanceStats {
        let mut stats = GovernanceStats {
            total_prospects: self.prospects.len(),
            voting: 0,
            closed: 0,
            inducted: 0,
            rejected: 0,
            member_count: self.members.len(),
            credentials_issued: self.credential.total_issued(),
        };
        for prospect in self.prospects.values() {
            match prospect.stage(now) {
                ProspectStage::Voting => stats.voting += 1,
                ProspectStage::Closed => stats.closed += 1,
                ProspectStage::Inducted => stats.inducted += 1,
                ProspectStage::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    /// Serialize the full engine state into a compact snapshot.
    pub fn snapshot(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore an engine from a [`Self::snapshot`] byte string.
    pub fn restore(bytes: &[u8]) -> anyhow::Result<GovernanceEngine> {
        Ok(bincode::deserialize(bytes)?)
    }
}
