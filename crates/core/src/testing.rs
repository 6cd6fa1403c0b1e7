//! In-memory collaborator implementations for tests
//!
//! A reference model of the persistence collaborator: committed record
//! states held in a map keyed by `(id, version)`, which makes the point
//! lookup's uniqueness contract hold trivially. Used by unit tests,
//! the workspace invariant suites, and doc examples.

use crate::error::{Error, Result};
use crate::record::Record;
use crate::traits::{ChangeDetector, SnapshotStore};
use crate::types::DocumentId;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory snapshot store keyed by `(id, version)`
#[derive(Default)]
pub struct MemoryStore {
    committed: RwLock<HashMap<(DocumentId, u64), Record>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a clone of the record's current state at its current version
    ///
    /// Replaces any state previously committed at the same `(id, version)`,
    /// preserving the uniqueness contract. The suspension flag is transient
    /// and does not survive the commit.
    pub fn commit(&self, record: &Record) {
        let mut committed = record.clone();
        committed.resume();
        self.committed
            .write()
            .insert((*committed.id(), committed.version()), committed);
    }

    /// Check whether a committed state exists at `(id, version)`
    pub fn contains(&self, id: &DocumentId, version: u64) -> bool {
        self.committed.read().contains_key(&(*id, version))
    }

    /// Get the number of committed states
    pub fn len(&self) -> usize {
        self.committed.read().len()
    }

    /// Check if the store has no committed states
    pub fn is_empty(&self) -> bool {
        self.committed.read().is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn find_one(&self, id: &DocumentId, version: u64) -> Result<Option<Record>> {
        Ok(self.committed.read().get(&(*id, version)).cloned())
    }
}

/// Snapshot store whose every lookup fails
///
/// Models an unreachable persistence layer for error-path tests.
pub struct FailingStore;

impl SnapshotStore for FailingStore {
    fn find_one(&self, _id: &DocumentId, _version: u64) -> Result<Option<Record>> {
        Err(Error::LookupFailure("store unavailable".to_string()))
    }
}

/// Change detector that always reports changed
pub struct AlwaysChanged;

impl ChangeDetector for AlwaysChanged {
    fn changed(&self, _record: &Record) -> bool {
        true
    }
}

/// Change detector that always reports unchanged
pub struct NeverChanged;

impl ChangeDetector for NeverChanged {
    fn changed(&self, _record: &Record) -> bool {
        false
    }
}
