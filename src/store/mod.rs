//! In-memory registry of validated automata.
//!
//! The store plays the storage collaborator: it assigns opaque ids, keeps the
//! submitted definition next to the compiled automaton, and serves
//! verification and graph requests by id. Nothing is written to disk;
//! [`Snapshot`] gives callers a versioned JSON copy to persist themselves.

use crate::core::Word;
use crate::definition::{Definition, Formalism};
use crate::graph::StateGraph;
use crate::limits::Limits;
use crate::machine::Automaton;
use crate::verifier::{Verifier, VerifyResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};
use uuid::Uuid;

pub mod error;
pub mod snapshot;

pub use error::StoreError;
pub use snapshot::{Snapshot, SnapshotEntry, SNAPSHOT_VERSION};

/// Opaque identifier of a stored automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutomatonId(Uuid);

impl AutomatonId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AutomatonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AutomatonId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A stored automaton together with the definition it was built from.
#[derive(Clone, Debug)]
pub struct StoredAutomaton {
    pub id: AutomatonId,
    pub definition: Definition,
    pub automaton: Arc<Automaton>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredAutomaton {
    pub fn formalism(&self) -> Formalism {
        self.definition.formalism()
    }
}

type Entries = HashMap<AutomatonId, Arc<StoredAutomaton>>;

/// Thread-safe map from [`AutomatonId`] to [`StoredAutomaton`].
///
/// Verification only holds the read lock long enough to clone an `Arc`, so
/// long runs never block writers.
///
/// # Example
///
/// ```rust
/// use automata_core::store::AutomatonStore;
/// use automata_core::{Formalism, Word};
/// use serde_json::json;
///
/// let store = AutomatonStore::new();
/// let id = store.create(Formalism::Dfa, &json!({
///     "states": ["q0", "q1"],
///     "input_symbols": ["0", "1"],
///     "transitions": {"q0": {"0": "q0", "1": "q1"}, "q1": {"0": "q1", "1": "q0"}},
///     "initial_state": "q0",
///     "final_states": ["q0"]
/// })).unwrap();
///
/// assert!(store.verify(&id, &Word::from("11")).unwrap().accepted);
/// assert!(!store.verify(&id, &Word::from("1")).unwrap().accepted);
/// ```
#[derive(Default)]
pub struct AutomatonStore {
    entries: RwLock<Entries>,
    verifier: Verifier,
}

impl AutomatonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose verification calls run under `limits`.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            entries: RwLock::default(),
            verifier: Verifier::new(limits),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries>, StoreError> {
        self.entries.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries>, StoreError> {
        self.entries.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Validate `raw` as a `formalism` definition and store it under a new id.
    pub fn create(&self, formalism: Formalism, raw: &Value) -> Result<AutomatonId, StoreError> {
        let definition = Definition::parse(raw, formalism)?;
        self.insert(definition)
    }

    /// Validate an already parsed definition and store it under a new id.
    pub fn insert(&self, definition: Definition) -> Result<AutomatonId, StoreError> {
        let automaton = definition.build()?;
        let now = Utc::now();
        let id = AutomatonId::generate();
        let entry = StoredAutomaton {
            id,
            definition,
            automaton: Arc::new(automaton),
            created_at: now,
            updated_at: now,
        };

        info!("store: created {} {}", entry.formalism(), id);
        self.write()?.insert(id, Arc::new(entry));
        Ok(id)
    }

    pub fn get(&self, id: &AutomatonId) -> Result<Arc<StoredAutomaton>, StoreError> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    /// Replace the definition stored under `id`, keeping its formalism and
    /// creation time.
    pub fn replace(&self, id: &AutomatonId, raw: &Value) -> Result<Arc<StoredAutomaton>, StoreError> {
        let formalism = self.get(id)?.formalism();
        let definition = Definition::parse(raw, formalism)?;
        let automaton = definition.build()?;

        let mut entries = self.write()?;
        let current = entries.get(id).ok_or(StoreError::NotFound(*id))?;
        let entry = Arc::new(StoredAutomaton {
            id: *id,
            definition,
            automaton: Arc::new(automaton),
            created_at: current.created_at,
            updated_at: Utc::now(),
        });
        entries.insert(*id, Arc::clone(&entry));

        info!("store: replaced {} {}", formalism, id);
        Ok(entry)
    }

    pub fn remove(&self, id: &AutomatonId) -> Result<(), StoreError> {
        self.write()?.remove(id).ok_or(StoreError::NotFound(*id))?;
        info!("store: removed {}", id);
        Ok(())
    }

    /// Verify `word` against the automaton stored under `id`.
    pub fn verify(&self, id: &AutomatonId, word: &Word) -> Result<VerifyResponse, StoreError> {
        let entry = self.get(id)?;
        let result = self.verifier.verify(&entry.automaton, word);
        debug!("store: {} on '{}' -> {}", id, word, result);
        Ok(VerifyResponse::from(result))
    }

    pub fn graph(&self, id: &AutomatonId) -> Result<StateGraph, StoreError> {
        Ok(self.get(id)?.automaton.graph())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.is_empty())
    }

    /// Copy every stored definition, ordered by creation time.
    pub fn snapshot(&self) -> Result<Snapshot, StoreError> {
        let mut entries: Vec<SnapshotEntry> = self
            .read()?
            .values()
            .map(|entry| SnapshotEntry {
                id: entry.id,
                definition: entry.definition.clone(),
                created_at: entry.created_at,
                updated_at: entry.updated_at,
            })
            .collect();
        entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(Snapshot {
            version: SNAPSHOT_VERSION,
            taken_at: Utc::now(),
            entries,
        })
    }

    /// Replace the store's contents with `snapshot`.
    ///
    /// Every definition is validated before anything is swapped in; one
    /// invalid entry leaves the store untouched.
    pub fn restore(&self, snapshot: &Snapshot) -> Result<usize, StoreError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedSnapshotVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let mut restored = HashMap::with_capacity(snapshot.entries.len());
        for entry in &snapshot.entries {
            let automaton = entry.definition.build()?;
            restored.insert(
                entry.id,
                Arc::new(StoredAutomaton {
                    id: entry.id,
                    definition: entry.definition.clone(),
                    automaton: Arc::new(automaton),
                    created_at: entry.created_at,
                    updated_at: entry.updated_at,
                }),
            );
        }

        let count = restored.len();
        *self.write()? = restored;
        info!("store: restored {} automata from snapshot", count);
        Ok(count)
    }
}
