//! Shared hosting wrapper for the governance engine
//!
//! The engine itself is single-writer (`&mut self` methods). A deployment
//! that exposes it behind concurrent access must serialize all mutations
//! against a given instance; this wrapper provides that discipline. Writes
//! take the write lock for their full indivisible step; reads take the read
//! lock and may be served concurrently.

use crate::engine::{GovernanceEngine, GovernanceStats};
use crate::errors::*;
use crate::events::GovernanceEvent;
use crate::prospect::{Prospect, VoteReceipt};
use conclave_types::{Identity, MetadataRef, ProspectId, Tick};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe handle around a [`GovernanceEngine`].
#[derive(Debug, Clone)]
pub struct SharedGovernance {
    inner: Arc<RwLock<GovernanceEngine>>,
}

impl SharedGovernance {
    /// Wrap an engine for shared hosting.
    pub fn new(engine: GovernanceEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// See [`GovernanceEngine::initialize_members`].
    pub fn initialize_members(&self, initial_owners: &[Identity]) -> Result<()> {
        self.inner.write().initialize_members(initial_owners)
    }

    /// See [`GovernanceEngine::introduce_prospect`].
    pub fn introduce_prospect(
        &self,
        caller: &Identity,
        candidate: Identity,
        metadata: MetadataRef,
        now: Tick,
    ) -> Result<ProspectId> {
        self.inner
            .write()
            .introduce_prospect(caller, candidate, metadata, now)
    }

    /// See [`GovernanceEngine::vote_on_prospect`].
    pub fn vote_on_prospect(
        &self,
        caller: &Identity,
        prospect_id: ProspectId,
        support: bool,
        now: Tick,
    ) -> Result<()> {
        self.inner
            .write()
            .vote_on_prospect(caller, prospect_id, support, now)
    }

    /// See [`GovernanceEngine::induct_member`].
    pub fn induct_member(&self, prospect_id: ProspectId, now: Tick) -> Result<Identity> {
        self.inner.write().induct_member(prospect_id, now)
    }

    /// Ordered bootstrap list.
    pub fn init_members(&self) -> Vec<Identity> {
        self.inner.read().init_members().to_vec()
    }

    /// Full prospect record.
    pub fn prospect(&self, prospect_id: ProspectId) -> Result<Prospect> {
        self.inner.read().prospect(prospect_id).cloned()
    }

    /// Metadata reference of a prospect.
    pub fn prospect_metadata(&self, prospect_id: ProspectId) -> Result<MetadataRef> {
        self.inner.read().prospect_metadata(prospect_id)
    }

    /// Current `(for, against)` tallies of a prospect.
    pub fn prospect_votes(&self, prospect_id: ProspectId) -> Result<(u64, u64)> {
        self.inner.read().prospect_votes(prospect_id)
    }

    /// A voter's receipt on a prospect.
    pub fn prospect_receipt(
        &self,
        prospect_id: ProspectId,
        voter: &Identity,
    ) -> Result<VoteReceipt> {
        self.inner.read().prospect_receipt(prospect_id, voter)
    }

    /// Whether `identity` currently holds membership.
    pub fn is_member(&self, identity: &Identity) -> bool {
        self.inner.read().is_member(identity)
    }

    /// Current number of members.
    pub fn member_count(&self) -> usize {
        self.inner.read().member_count()
    }

    /// Whether the one-time bootstrap has run.
    pub fn is_initialized(&self) -> bool {
        self.inner.read().is_initialized()
    }

    /// Copy of the append-only event log.
    pub fn events(&self) -> Vec<GovernanceEvent> {
        self.inner.read().events().to_vec()
    }

    /// Summary statistics at logical time `now`.
    pub fn stats(&self, now: Tick) -> GovernanceStats {
        self.inner.read().stats(now)
    }

    /// Serialize a stable snapshot of the engine state; concurrent readers
    /// can inspect it without holding the lock.
    pub fn snapshot(&self) -> anyhow::Result<Vec<u8>> {
        self.inner.read().snapshot()
    }
}
