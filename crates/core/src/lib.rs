//! Core types and traits for Vellum
//!
//! This crate defines the foundational types used throughout the system:
//! - DocumentId: Unique identifier for a document record
//! - RecordType: Type key scoping policy configuration
//! - Attributes: A record's persisted field state
//! - Record / Snapshot: the versioned entity and its archived revisions
//! - Error: Error type hierarchy
//! - Traits: Collaborator seams (SnapshotStore, ChangeDetector)
//! - Testing: In-memory collaborator implementations

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod attributes;
pub mod error;
pub mod record;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use attributes::Attributes;
pub use error::{Error, Result};
pub use record::{Record, Snapshot};
pub use traits::{ChangeDetector, SnapshotStore};
pub use types::{DocumentId, RecordType};
