//! Collaborator traits for the revision subsystem
//!
//! This module defines the seams to the host mapper:
//! - SnapshotStore: point lookup of previously committed revisions
//! - ChangeDetector: the host's dirty-tracking signal
//!
//! Both are implemented by the host persistence layer; this crate ships
//! in-memory implementations under [`testing`](crate::testing) for tests.

use crate::error::Result;
use crate::record::Record;
use crate::types::DocumentId;

/// Point lookup of previously committed record state
///
/// ## Contract
///
/// - `(id, version)` pairs are unique among committed records; the lookup
///   returns exactly one match or none, never several.
/// - `Ok(None)` means "no committed record at that version" and is the
///   normal outcome for a record's first save.
/// - `Err(LookupFailure)` means the query itself failed (connectivity,
///   timeout); callers must abort the enclosing save rather than commit
///   attributes while silently dropping history.
///
/// Thread safety: implementations must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait SnapshotStore: Send + Sync {
    /// Find the committed record with exactly this identifier and version
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails. A missing record is
    /// `Ok(None)`, not an error.
    fn find_one(&self, id: &DocumentId, version: u64) -> Result<Option<Record>>;
}

/// The host's dirty-tracking signal
///
/// Decides whether a record's attributes differ from its last loaded or
/// persisted state. When this reports unchanged, the save hook skips the
/// revision engine entirely.
pub trait ChangeDetector: Send + Sync {
    /// Check whether the record has changed since it was loaded
    fn changed(&self, record: &Record) -> bool;
}
