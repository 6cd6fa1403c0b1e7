//! Save-pipeline hook: the glue between the host's save flow and revision
//!
//! The host pipeline calls [`SaveHook::before_save`] on each attempt to
//! persist a content-changing write, strictly before the new state
//! overwrites the previously committed document. The ordering is
//! load-bearing: the revision engine's lookup must still see the
//! pre-commit view of the prior version.
//!
//! The hook owns the two gates in front of the engine:
//!
//! 1. the dirty check: an unchanged record skips revision entirely
//!    (the engine is not even called);
//! 2. the suspension flag: a versionless instance skips revision.
//!
//! Committing the write (attributes plus the now-possibly-updated
//! history, atomically) remains the host's job after the hook returns.

use tracing::trace;
use vellum_core::{ChangeDetector, Record, Result};

use crate::revision::Revise;

/// Pre-commit hook wiring the dirty check to the revision engine
pub struct SaveHook<R, C> {
    reviser: R,
    detector: C,
}

impl<R: Revise, C: ChangeDetector> SaveHook<R, C> {
    /// Create a hook over a reviser and the host's dirty check
    pub fn new(reviser: R, detector: C) -> Self {
        SaveHook { reviser, detector }
    }

    /// Run the revision step for a pending write, if it applies
    ///
    /// # Errors
    ///
    /// Propagates `LookupFailure` from the revision engine; the host must
    /// then abort the save rather than commit without history.
    pub fn before_save(&self, record: &mut Record) -> Result<()> {
        if !self.detector.changed(record) {
            trace!(id = %record.id(), "record unchanged, skipping revision");
            return Ok(());
        }
        if record.is_versionless() {
            trace!(id = %record.id(), "record versionless, skipping revision");
            return Ok(());
        }
        self.reviser.revise(record)
    }
}
