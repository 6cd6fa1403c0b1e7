//! Revision engine: archive the prior committed state before a write
//!
//! ## Design: STATELESS FACADE
//!
//! `RevisionEngine` holds only `Arc` references to its collaborators: the
//! snapshot store and the policy registry. No internal state, no caches.
//! Multiple engines over the same collaborators are safe.
//!
//! ## Call timing
//!
//! The save pipeline invokes [`RevisionEngine::revise`] immediately before
//! a content-changing write commits, while the record's in-memory version
//! still reflects the version it was loaded at. The lookup therefore runs
//! against a pre-commit view of the previous revision; the engine never
//! persists anything itself; the updated history rides along with the
//! write the pipeline is about to execute.

use std::sync::Arc;
use tracing::{debug, trace};
use vellum_core::{Record, Result, Snapshot, SnapshotStore};

use crate::policy::VersionPolicy;

/// Seam for invoking the revision step
///
/// The save hook is generic over this trait so tests can substitute a
/// spy and assert the step was (or was not) reached.
pub trait Revise {
    /// Archive the record's prior committed state, if any
    ///
    /// # Errors
    ///
    /// Returns `LookupFailure` if the store query fails.
    fn revise(&self, record: &mut Record) -> Result<()>;
}

/// Archives a record's previously committed state into its history
pub struct RevisionEngine<S> {
    store: Arc<S>,
    policy: Arc<VersionPolicy>,
}

impl<S: SnapshotStore> RevisionEngine<S> {
    /// Create an engine over a snapshot store and a policy registry
    pub fn new(store: Arc<S>, policy: Arc<VersionPolicy>) -> Self {
        RevisionEngine { store, policy }
    }

    /// Get the policy registry this engine consults
    pub fn policy(&self) -> &Arc<VersionPolicy> {
        &self.policy
    }

    /// Get the snapshot store this engine queries
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Archive the prior committed state of `record`, then trim to the cap
    ///
    /// Looks up the committed record at `(record.id, record.version)`.
    /// If none exists (first save), history is left untouched. If one is
    /// found, a history-free snapshot of it is appended to the tail of
    /// `record.history` and the oldest entries are evicted until the
    /// type's cap holds. A cap of 0 still appends before trimming, so
    /// every path through this function behaves uniformly.
    ///
    /// # Errors
    ///
    /// Returns `LookupFailure` if the store query itself fails; the
    /// enclosing save must abort. A missing prior revision is not an
    /// error.
    pub fn revise(&self, record: &mut Record) -> Result<()> {
        if record.is_versionless() {
            trace!(id = %record.id(), "versioning suspended, skipping revision");
            return Ok(());
        }

        let prior = match self.store.find_one(record.id(), record.version())? {
            Some(prior) => prior,
            None => {
                trace!(
                    id = %record.id(),
                    version = record.version(),
                    "no committed revision, skipping archive"
                );
                return Ok(());
            }
        };

        // The snapshot keeps the returned record's own version field, which
        // the store contract says matches the query but is not re-derived.
        let snapshot = Snapshot::capture(&prior);
        debug!(
            id = %record.id(),
            version = snapshot.version,
            "archived prior revision"
        );
        record.history_mut().push(snapshot);

        let cap = self.policy.cap_for(record.record_type());
        let evicted = trim_to_cap(record.history_mut(), cap);
        if evicted > 0 {
            debug!(id = %record.id(), evicted, cap, "trimmed revision history");
        }

        Ok(())
    }
}

impl<S: SnapshotStore> Revise for RevisionEngine<S> {
    fn revise(&self, record: &mut Record) -> Result<()> {
        RevisionEngine::revise(self, record)
    }
}

/// Evict oldest entries until `history.len() <= cap`
///
/// Removes from the front, preserving the most recently appended entries
/// in their original append order. Returns the number evicted.
fn trim_to_cap(history: &mut Vec<Snapshot>, cap: u64) -> usize {
    let len = history.len() as u64;
    if len <= cap {
        return 0;
    }
    let excess = (len - cap) as usize;
    history.drain(..excess);
    excess
}
