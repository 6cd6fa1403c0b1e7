//! Scoped suspension of history capture
//!
//! Wraps a unit of work so that [`Record::is_versionless`] is true for
//! exactly its duration: the flag is raised on entry and cleared on every
//! exit path: normal return, early return from the closure, or a panic
//! unwinding through it. The clear lives in a guard's `Drop` impl, so a
//! failing unit of work cannot leave the instance permanently suspended.
//!
//! For manual begin/end bracketing without automatic reset, use
//! [`Record::suspend`] and [`Record::resume`] directly.

use tracing::trace;
use vellum_core::Record;

/// Clears the suspension flag when dropped
struct SuspendGuard<'a> {
    record: &'a mut Record,
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        self.record.resume();
    }
}

/// Run `work` with history capture suspended on `record`
///
/// Any `revise` invocation on this exact instance during `work` is a
/// no-op. Suspension is per-instance: other records of the same type are
/// unaffected. Returns whatever `work` returns, so a fallible unit of
/// work can be written as `versionless(record, |doc| doc_save(doc))?`;
/// the flag is already cleared by the time the `?` runs.
///
/// # Example
///
/// ```
/// use vellum_core::{Attributes, Record, RecordType};
/// use vellum_engine::versionless;
///
/// let mut record = Record::new(RecordType::new("person"), Attributes::new());
/// let result = versionless(&mut record, |doc| {
///     assert!(doc.is_versionless());
///     "saved"
/// });
/// assert_eq!(result, "saved");
/// assert!(!record.is_versionless());
/// ```
pub fn versionless<T, F>(record: &mut Record, work: F) -> T
where
    F: FnOnce(&mut Record) -> T,
{
    trace!(id = %record.id(), "suspending history capture");
    record.suspend();
    let mut guard = SuspendGuard { record };
    work(&mut *guard.record)
}
