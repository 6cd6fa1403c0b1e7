//! Per-type version policy registry
//!
//! Controls how many archived revisions a record type retains. The cap is
//! the only state shared across record instances; everything else in this
//! subsystem is instance-owned.
//!
//! ## Concurrency
//!
//! Concurrent `set_cap` calls for the same type race benignly to
//! last-writer-wins. Entries are replaced whole, so concurrent readers
//! never observe a torn cap value. No further locking is required.

use dashmap::DashMap;
use vellum_core::{Error, RecordType, Result};

/// Cap applied to a record type that was never configured
pub const DEFAULT_CAP: u64 = 5;

/// A cap value accepted by the setter: an integer or a numeric string
///
/// Hosts configure caps from typed code and from stringly-typed config
/// alike, so the setter takes either form and normalizes to an integer.
/// String parsing is strict base-10; anything else surfaces
/// [`Error::InvalidPolicyValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapValue {
    /// Already-numeric cap
    Count(u64),
    /// Cap expressed as a base-10 string, parsed on resolution
    Text(String),
}

impl CapValue {
    /// Normalize to an integer cap
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicyValue` if a text value does not parse as a
    /// base-10 unsigned integer.
    pub fn resolve(&self) -> Result<u64> {
        match self {
            CapValue::Count(n) => Ok(*n),
            CapValue::Text(s) => s
                .parse::<u64>()
                .map_err(|_| Error::InvalidPolicyValue(s.clone())),
        }
    }
}

impl From<u64> for CapValue {
    fn from(n: u64) -> Self {
        CapValue::Count(n)
    }
}

impl From<u32> for CapValue {
    fn from(n: u32) -> Self {
        CapValue::Count(n as u64)
    }
}

impl From<usize> for CapValue {
    fn from(n: usize) -> Self {
        CapValue::Count(n as u64)
    }
}

impl From<&str> for CapValue {
    fn from(s: &str) -> Self {
        CapValue::Text(s.to_string())
    }
}

impl From<String> for CapValue {
    fn from(s: String) -> Self {
        CapValue::Text(s)
    }
}

/// Registry of per-type history caps
///
/// Keyed by [`RecordType`]; hosts pass the type explicitly on every call
/// rather than relying on ambient lookup. Types with no entry use the
/// registry's default cap. Changing a cap affects subsequent `revise`
/// calls only; existing instances are trimmed on their next revision.
pub struct VersionPolicy {
    caps: DashMap<RecordType, u64>,
    default_cap: u64,
}

impl VersionPolicy {
    /// Create a registry with the standard default cap
    pub fn new() -> Self {
        Self::with_default(DEFAULT_CAP)
    }

    /// Create a registry with a custom default cap
    pub fn with_default(default_cap: u64) -> Self {
        VersionPolicy {
            caps: DashMap::new(),
            default_cap,
        }
    }

    /// Set the cap for a record type
    ///
    /// Accepts an integer or a base-10 numeric string. A cap of 0 is
    /// legal and means "retain no history".
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicyValue` if the value does not parse; the
    /// stored cap is left unchanged in that case.
    pub fn set_cap(&self, record_type: &RecordType, value: impl Into<CapValue>) -> Result<()> {
        let cap = value.into().resolve()?;
        self.caps.insert(record_type.clone(), cap);
        Ok(())
    }

    /// Get the cap configured for a record type, or the default
    pub fn cap_for(&self, record_type: &RecordType) -> u64 {
        self.caps
            .get(record_type)
            .map(|entry| *entry)
            .unwrap_or(self.default_cap)
    }

    /// Get the default cap applied to unconfigured types
    pub fn default_cap(&self) -> u64 {
        self.default_cap
    }

    /// Remove a type's cap, reverting it to the default
    ///
    /// Returns the previously configured cap, if any.
    pub fn remove(&self, record_type: &RecordType) -> Option<u64> {
        self.caps.remove(record_type).map(|(_, cap)| cap)
    }

    /// Clear all configured caps
    pub fn clear(&self) {
        self.caps.clear();
    }

    /// Get the number of explicitly configured types
    pub fn len(&self) -> usize {
        self.caps.len()
    }

    /// Check if no type has an explicit cap
    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VersionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionPolicy")
            .field("configured_types", &self.caps.len())
            .field("default_cap", &self.default_cap)
            .finish()
    }
}
