//! Save-pipeline integration: dirty-check gating and abort semantics.

use crate::common::{self, TestMapper};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use vellum::testing::{AlwaysChanged, FailingStore, NeverChanged};
use vellum::{
    versionless, Error, Record, Result, Revise, RevisionEngine, SaveHook, SnapshotStore,
    VersionPolicy,
};

/// Reviser spy recording every invocation through a shared counter.
#[derive(Default)]
struct SpyReviser {
    calls: Rc<Cell<usize>>,
}

impl SpyReviser {
    fn with_counter() -> (Self, Rc<Cell<usize>>) {
        let spy = Self::default();
        let calls = Rc::clone(&spy.calls);
        (spy, calls)
    }
}

impl Revise for SpyReviser {
    fn revise(&self, _record: &mut Record) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

#[test]
fn unchanged_record_skips_revision_entirely() {
    let (spy, calls) = SpyReviser::with_counter();
    let hook = SaveHook::new(spy, NeverChanged);
    let mut person = common::wiki_page("unchanged");

    hook.before_save(&mut person).unwrap();
    assert_eq!(calls.get(), 0);
}

#[test]
fn changed_record_runs_revision_before_commit() {
    let (spy, calls) = SpyReviser::with_counter();
    let hook = SaveHook::new(spy, AlwaysChanged);
    let mut person = common::wiki_page("changed");

    hook.before_save(&mut person).unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn suspended_record_skips_revision() {
    let (spy, calls) = SpyReviser::with_counter();
    let hook = SaveHook::new(spy, AlwaysChanged);
    let mut person = common::wiki_page("suspended");

    versionless(&mut person, |doc| hook.before_save(doc)).unwrap();
    assert_eq!(calls.get(), 0);
}

#[test]
fn lookup_failure_aborts_the_save_before_commit() {
    let engine = RevisionEngine::new(Arc::new(FailingStore), Arc::new(VersionPolicy::new()));
    let hook = SaveHook::new(engine, AlwaysChanged);
    let mut page = common::wiki_page("1");

    let result = hook.before_save(&mut page);
    assert!(matches!(result, Err(Error::LookupFailure(_))));
    // Nothing was archived; the host must not commit.
    assert!(page.history().is_empty());
}

#[test]
fn full_save_flow_builds_bounded_history() {
    common::init_tracing();
    let mapper = TestMapper::new();
    mapper
        .policy
        .set_cap(&common::wiki_page_type(), 3u64)
        .unwrap();

    let mut page = common::wiki_page("0");
    for title in 1..=6 {
        page.attributes_mut().set("title", title.to_string());
        mapper.save(&mut page).unwrap();
    }

    assert_eq!(page.version(), 6);
    let versions: Vec<u64> = page.history().iter().map(|s| s.version).collect();
    assert_eq!(versions, [3, 4, 5]);

    // The committed tail matches the in-memory state.
    let committed = mapper
        .store
        .find_one(page.id(), page.version())
        .unwrap()
        .unwrap();
    assert_eq!(committed.attributes(), page.attributes());
    assert_eq!(committed.history().len(), 3);
}
