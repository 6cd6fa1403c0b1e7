//! Version policy invariants: cap configuration and normalization.

use crate::common;
use vellum::{Error, RecordType, VersionPolicy, DEFAULT_CAP};

#[test]
fn integer_caps_round_trip() {
    let policy = VersionPolicy::new();
    for cap in [0u64, 1, 5, 10, 1000] {
        policy.set_cap(&common::wiki_page_type(), cap).unwrap();
        assert_eq!(policy.cap_for(&common::wiki_page_type()), cap);
    }
}

#[test]
fn numeric_string_caps_round_trip() {
    let policy = VersionPolicy::new();
    for (text, cap) in [("0", 0u64), ("1", 1), ("10", 10), ("1000", 1000)] {
        policy.set_cap(&common::wiki_page_type(), text).unwrap();
        assert_eq!(policy.cap_for(&common::wiki_page_type()), cap);
    }
}

#[test]
fn unparseable_cap_fails_and_leaves_cap_unchanged() {
    let policy = VersionPolicy::new();
    policy.set_cap(&common::wiki_page_type(), 10u64).unwrap();

    for bad in ["abc", "", "5x", "1.5", "-2"] {
        let result = policy.set_cap(&common::wiki_page_type(), bad);
        assert!(
            matches!(result, Err(Error::InvalidPolicyValue(_))),
            "expected InvalidPolicyValue for {:?}",
            bad
        );
        assert_eq!(policy.cap_for(&common::wiki_page_type()), 10);
    }
}

#[test]
fn unconfigured_type_uses_default() {
    let policy = VersionPolicy::new();
    assert_eq!(policy.cap_for(&RecordType::new("person")), DEFAULT_CAP);
    assert_eq!(DEFAULT_CAP, 5);
}

#[test]
fn caps_are_scoped_per_type() {
    let policy = VersionPolicy::new();
    policy.set_cap(&common::wiki_page_type(), 2u64).unwrap();
    policy.set_cap(&RecordType::new("person"), 9u64).unwrap();

    assert_eq!(policy.cap_for(&common::wiki_page_type()), 2);
    assert_eq!(policy.cap_for(&RecordType::new("person")), 9);
}
