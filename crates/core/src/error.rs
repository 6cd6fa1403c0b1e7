//! Error types for vellum
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for vellum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the revision subsystem
///
/// "Not found" during a lookup is deliberately absent: a missing prior
/// revision is a normal outcome and is modeled as `Ok(None)` by
/// [`SnapshotStore::find_one`](crate::traits::SnapshotStore::find_one).
#[derive(Debug, Error)]
pub enum Error {
    /// Cap setter given a value that does not parse as a base-10 integer
    #[error("Invalid policy value: {0:?}")]
    InvalidPolicyValue(String),

    /// Persistence collaborator failed during the pre-write lookup
    ///
    /// The enclosing save must abort; archiving is never skipped silently
    /// on infrastructure failure.
    #[error("Lookup failure: {0}")]
    LookupFailure(String),
}
