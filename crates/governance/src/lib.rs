//! Conclave Governance Engine
//!
//! Drives admission into a fixed-capacity membership organization:
//! - a one-time bootstrap seeds the initial cohort with credentials,
//! - members introduce prospects and vote on them within a bounded window,
//! - anyone may trigger induction once the window closes; a simple majority
//!   of cast votes mints the candidate a membership credential.
//!
//! All deadline logic runs against an injected logical clock ([`Tick`]),
//! never wall time, so outcomes are deterministic and reproducible under
//! test. Every operation commits fully or aborts with no observable
//! mutation; the one specified exception is that a failed majority (and an
//! already-member candidate) finalizes the prospect as part of the failure.
//!
//! [`Tick`]: conclave_types::Tick

pub mod engine;
pub mod errors;
pub mod events;
pub mod prospect;
pub mod shared;

pub use engine::{GovernanceEngine, GovernanceStats};
pub use errors::{GovernanceError, Result};
pub use events::GovernanceEvent;
pub use prospect::{Prospect, ProspectStage, VoteReceipt};
pub use shared::SharedGovernance;

/// Length of the voting window in clock ticks, fixed at deployment.
pub const VOTING_WINDOW: u64 = 72_000;

/// Governance crate version (for API introspection)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
