//! Scalar newtypes used by the governance engine.
//!
//! Prospect and credential ids are monotonic counters starting at 1. The
//! [`Tick`] is the logical clock value (block height or equivalent monotonic
//! counter) supplied by the execution environment on every time-sensitive
//! call; the engine never samples time itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a prospect; strictly increasing, assigned at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProspectId(pub u64);

impl fmt::Display for ProspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProspectId {
    fn from(value: u64) -> Self {
        ProspectId(value)
    }
}

/// Identifier of an issued membership credential; strictly increasing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CredentialId(pub u64);

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CredentialId {
    fn from(value: u64) -> Self {
        CredentialId(value)
    }
}

/// Logical clock value injected by the execution environment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Tick(pub u64);

impl Tick {
    /// The tick `n` steps ahead of this one, saturating at the counter's maximum.
    pub fn advance(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Tick {
    fn from(value: u64) -> Self {
        Tick(value)
    }
}
