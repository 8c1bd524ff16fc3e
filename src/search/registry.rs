//! Deduplication of reported goals.

use std::collections::HashSet;

/// Canonical board strings of every goal reported during one run.
#[derive(Debug, Clone, Default)]
pub struct GoalRegistry {
    keys: HashSet<String>,
}

impl GoalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Records `key`. Returns `true` if it had not been seen before.
    pub fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}
