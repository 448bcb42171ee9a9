//! Per-batch registry of content hashes used by the duplicate guard.

use std::collections::HashSet;

/// Set of hex-encoded content digests seen during one batch.
///
/// Grows monotonically; there is no removal. Dropped with the pipeline that owns it.
#[derive(Debug, Default, Clone)]
pub struct HashRegistry {
    seen: HashSet<String>,
}

impl HashRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `hash`. Returns `false` if it was already present.
    pub fn insert_if_new(&mut self, hash: &str) -> bool {
        if self.seen.contains(hash) {
            return false;
        }
        self.seen.insert(hash.to_string())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
