//! Shared test utilities for the versioning invariant suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's
//! main.rs.

#![allow(dead_code)]

use std::sync::Arc;
use vellum::testing::MemoryStore;
use vellum::{Attributes, Record, RecordType, Result, RevisionEngine, VersionPolicy};

/// Install a test-writer subscriber so `RUST_LOG` surfaces engine traces.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Record type used by most fixtures.
pub fn wiki_page_type() -> RecordType {
    RecordType::new("wiki_page")
}

/// A wiki page record with a title attribute, at version 1.
pub fn wiki_page(title: &str) -> Record {
    let mut attrs = Attributes::new();
    attrs.set("title", title);
    Record::new(wiki_page_type(), attrs)
}

/// Minimal stand-in for a host mapper's save flow.
///
/// Runs the revision step against the pre-commit view, advances the
/// version counter when the current version was already committed, then
/// commits the new state. Mirrors the ordering contract the engine
/// relies on: revise strictly before the write lands.
pub struct TestMapper {
    pub store: Arc<MemoryStore>,
    pub policy: Arc<VersionPolicy>,
    pub engine: RevisionEngine<MemoryStore>,
}

impl TestMapper {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let policy = Arc::new(VersionPolicy::new());
        let engine = RevisionEngine::new(Arc::clone(&store), Arc::clone(&policy));
        TestMapper {
            store,
            policy,
            engine,
        }
    }

    /// Save a content-changing write.
    pub fn save(&self, record: &mut Record) -> Result<()> {
        self.engine.revise(record)?;
        if self.store.contains(record.id(), record.version()) {
            record.increment_version();
        }
        self.store.commit(record);
        Ok(())
    }
}

impl Default for TestMapper {
    fn default() -> Self {
        Self::new()
    }
}
