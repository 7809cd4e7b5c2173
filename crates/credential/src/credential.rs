//! Membership credential ledger
//!
//! Holds a 1:1 mapping from credential id to owning identity plus a reverse
//! index for holder lookups. Minting is restricted to the single authority
//! injected at construction and checked by equality.

use crate::errors::*;
use conclave_types::{CredentialId, Identity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Non-transferable membership credential ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipCredential {
    /// The only identity allowed to mint, fixed at construction
    authority: Identity,
    /// Credential id → owning identity
    owners: BTreeMap<CredentialId, Identity>,
    /// Owning identity → credential ids held
    holder_index: BTreeMap<Identity, Vec<CredentialId>>,
    /// Next credential id to assign; ids start at 1
    next_id: u64,
}

impl MembershipCredential {
    /// Create a new credential ledger whose sole mint authority is `authority`.
    pub fn new(authority: Identity) -> Self {
        Self {
            authority,
            owners: BTreeMap::new(),
            holder_index: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Mint the next credential to `to`.
    ///
    /// Only the authority may call this; any other caller fails with
    /// [`CredentialError::Unauthorized`]. Repeated minting to the same
    /// identity is not rejected here.
    pub fn mint(&mut self, caller: &Identity, to: &Identity) -> Result<CredentialId> {
        if *caller != self.authority {
            return Err(CredentialError::Unauthorized { caller: *caller });
        }

        let id = CredentialId(self.next_id);
        self.next_id += 1;

        self.owners.insert(id, *to);
        self.holder_index.entry(*to).or_default().push(id);

        info!(
            target: "credential",
            "Minted credential {} to {}",
            id,
            to
        );

        Ok(id)
    }

    /// Look up the owner of a credential id.
    pub fn owner_of(&self, id: CredentialId) -> Result<Identity> {
        self.owners
            .get(&id)
            .copied()
            .ok_or(CredentialError::NotFound { credential_id: id })
    }

    /// Number of credentials held by `identity` (0 or 1 in normal use).
    pub fn balance_of(&self, identity: &Identity) -> usize {
        self.holder_index
            .get(identity)
            .map(|ids| ids.len())
            .unwrap_or(0)
    }

    /// All credential ids held by `identity`, in mint order.
    pub fn credentials_of(&self, identity: &Identity) -> &[CredentialId] {
        self.holder_index
            .get(identity)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of credentials ever issued.
    pub fn total_issued(&self) -> u64 {
        self.next_id - 1
    }

    /// The sole identity authorized to mint.
    pub fn authority(&self) -> &Identity {
        &self.authority
    }
}
