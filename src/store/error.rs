//! Store error types.

use crate::definition::ValidationError;
use crate::store::AutomatonId;
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No automaton is stored under the id
    #[error("automaton {0} not found")]
    NotFound(AutomatonId),

    /// The submitted definition failed validation
    #[error("invalid definition: {0}")]
    Invalid(#[from] ValidationError),

    /// A writer panicked while holding the store lock
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Snapshot could not be encoded or decoded
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Snapshot version is not supported by this version
    #[error("unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedSnapshotVersion { found: u32, supported: u32 },
}
