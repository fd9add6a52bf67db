//! Session-wide verdict cache.

use std::sync::Arc;

use dashmap::DashMap;
use truthcheck_protocols::Verdict;

/// Verdicts keyed by exact title text.
///
/// Entries never expire; the cache lives as long as the page session.
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct VerdictCache {
    entries: Arc<DashMap<String, Verdict>>,
}

impl VerdictCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, title: &str) -> Option<Verdict> {
        self.entries.get(title).map(|entry| entry.value().clone())
    }

    /// Store `verdict`, replacing any earlier one for the same title.
    pub fn insert(&self, title: impl Into<String>, verdict: Verdict) {
        self.entries.insert(title.into(), verdict);
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
