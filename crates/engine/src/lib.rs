//! Revision engine for Vellum
//!
//! This crate orchestrates the versioning behavior over the core types:
//! - VersionPolicy: per-type history caps (the only cross-instance state)
//! - RevisionEngine: archive-then-trim before a content-changing write
//! - versionless: scoped suspension of history capture
//! - SaveHook: the pre-commit glue the host save pipeline invokes
//!
//! The engine is the only component that knows about:
//! - Policy lookup and trimming order
//! - The pre-commit lookup against the persistence collaborator
//! - Suspension gating

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pipeline;
pub mod policy;
pub mod revision;
pub mod suspend;

pub use pipeline::SaveHook;
pub use policy::{CapValue, VersionPolicy, DEFAULT_CAP};
pub use revision::{Revise, RevisionEngine};
pub use suspend::versionless;

// Re-export the core surface so hosts can depend on this crate alone.
pub use vellum_core::{
    Attributes, ChangeDetector, DocumentId, Error, Record, RecordType, Result, Snapshot,
    SnapshotStore,
};

/// In-memory collaborator implementations for tests
pub use vellum_core::testing;
