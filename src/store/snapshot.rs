//! Versioned JSON snapshots of the store.

use crate::definition::Definition;
use crate::store::error::StoreError;
use crate::store::AutomatonId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One stored automaton, minus its compiled form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub id: AutomatonId,
    pub definition: Definition,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Serializable copy of every stored definition.
///
/// Compiled automata are not included; restoring re-validates each
/// definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, refusing versions this crate does not understand.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let snapshot: Self = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedSnapshotVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}
