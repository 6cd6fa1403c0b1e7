//! Record and Snapshot: the versioned entity and its archived revisions
//!
//! ## Design
//!
//! - **Record**: a document with an identity, a monotonic version counter,
//!   current attribute state, and a bounded history of prior revisions.
//! - **Snapshot**: an immutable capture of a record's committed state at a
//!   prior version. Snapshots have no history field at all, so archived
//!   entries can never nest further history (bounded depth 1 holds by
//!   construction).
//!
//! ## Version counter
//!
//! `version` starts at 1 for a newly created record and reflects the
//! version the record held the last time it was loaded from storage.
//! This subsystem only reads the counter; incrementing it is the save
//! pipeline's responsibility, via [`Record::increment_version`].
//!
//! ## Suspension flag
//!
//! `versionless` is transient per-instance state: never serialized, never
//! shared between instances. [`Record::suspend`] and [`Record::resume`]
//! are the manual bracketing pair; callers who want reset-on-every-exit
//! semantics use the scoped form in the engine crate instead.

use crate::attributes::Attributes;
use crate::types::{DocumentId, RecordType};
use serde::{Deserialize, Serialize};

/// A versioned document record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: DocumentId,
    record_type: RecordType,
    version: u64,
    attributes: Attributes,
    history: Vec<Snapshot>,
    #[serde(skip)]
    versionless: bool,
}

impl Record {
    /// Create a new, never-persisted record at version 1 with empty history
    pub fn new(record_type: RecordType, attributes: Attributes) -> Self {
        Self::with_id(DocumentId::new(), record_type, attributes)
    }

    /// Create a new record with an explicit identifier
    ///
    /// Used by hosts whose mapper assigns identities itself.
    pub fn with_id(id: DocumentId, record_type: RecordType, attributes: Attributes) -> Self {
        Record {
            id,
            record_type,
            version: 1,
            attributes,
            history: Vec::new(),
            versionless: false,
        }
    }

    /// Get the record's identifier
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Get the record's type
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Get the current version counter
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Advance the version counter by one
    ///
    /// Save-pipeline responsibility: called after the revision engine has
    /// archived the prior state and before the new state commits. The
    /// counter only ever moves forward.
    pub fn increment_version(&mut self) {
        self.version += 1;
    }

    /// Get the current attribute state
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get mutable access to the attribute state
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Get the archived revisions, oldest first
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Get mutable access to the archived revisions
    ///
    /// The revision engine appends and trims through this; hosts normally
    /// have no reason to touch it.
    pub fn history_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.history
    }

    /// Get the most recently archived revision, if any
    pub fn latest_snapshot(&self) -> Option<&Snapshot> {
        self.history.last()
    }

    /// Turn suspension on with no automatic reset
    ///
    /// Low-level escape hatch for manual begin/end bracketing; the caller
    /// owns the matching [`resume`](Record::resume). Easy to misuse: a
    /// missed resume leaves the instance permanently versionless. Prefer
    /// the scoped form, which resets on every exit path.
    pub fn suspend(&mut self) {
        self.versionless = true;
    }

    /// Turn suspension off
    pub fn resume(&mut self) {
        self.versionless = false;
    }

    /// Check whether history capture is currently suspended
    pub fn is_versionless(&self) -> bool {
        self.versionless
    }
}

/// Immutable capture of a record's committed state at a prior version
///
/// Holds the version the state was committed at and the attribute state
/// itself. The version is whatever the committed record's own counter
/// said, not re-derived from the lookup. Deliberately history-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version the captured state was committed at
    pub version: u64,
    /// Attribute state at that version
    pub attributes: Attributes,
}

impl Snapshot {
    /// Capture a committed record's state, excluding its history
    pub fn capture(committed: &Record) -> Self {
        Snapshot {
            version: committed.version,
            attributes: committed.attributes.clone(),
        }
    }
}
