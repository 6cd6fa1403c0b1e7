//! Vellum - Bounded revision history for document-store-backed mappers
//!
//! Vellum archives the previously committed state of a document record
//! before a content-changing write, trims the archive to a per-type cap,
//! and lets callers suspend archiving for a scoped unit of work.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use vellum::testing::MemoryStore;
//! use vellum::{versionless, Attributes, Record, RecordType, RevisionEngine, VersionPolicy};
//!
//! # fn main() -> vellum::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//! let policy = Arc::new(VersionPolicy::new());
//! policy.set_cap(&RecordType::new("wiki_page"), 5u64)?;
//!
//! let engine = RevisionEngine::new(Arc::clone(&store), policy);
//!
//! // First save: nothing committed yet, history stays empty.
//! let mut page = Record::new(RecordType::new("wiki_page"), Attributes::new());
//! engine.revise(&mut page)?;
//! assert!(page.history().is_empty());
//!
//! // Later saves archive the committed state before the write.
//! store.commit(&page);
//! page.attributes_mut().set("title", "revised");
//! engine.revise(&mut page)?;
//! assert_eq!(page.history().len(), 1);
//!
//! // Scoped suspension: no archiving inside, flag clear afterwards.
//! versionless(&mut page, |doc| engine.revise(doc))?;
//! assert_eq!(page.history().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! [`RevisionEngine`] runs immediately before a content-changing write
//! commits, so its lookup sees the pre-commit view of the prior version.
//! [`SaveHook`] wires the host's dirty check in front of it. Persistence
//! itself (committing attributes and history atomically, incrementing
//! the version counter) stays with the host mapper.

// Re-export the public API from vellum-engine
pub use vellum_engine::*;
