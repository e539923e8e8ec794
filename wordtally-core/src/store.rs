use crate::model::WordFrequency;
use std::collections::HashMap;

/// Result store contract: a mapping from URL to its word-frequency table.
///
/// Implementations need no internal locking under the scrape pipeline,
/// which serializes all writes through a single owner after the completion
/// barrier. An implementation shared with writers outside the pipeline must
/// add its own synchronization.
pub trait WordStore {
    /// Whether a frequency table has been stored for `url`.
    fn exists(&self, url: &str) -> bool;

    /// The stored frequency table for `url`, if any. Absence means the URL
    /// was never scraped or its fetch failed.
    fn get(&self, url: &str) -> Option<&WordFrequency>;

    /// Store the frequency table for `url`, replacing any previous entry.
    fn set(&mut self, url: String, words: WordFrequency);
}

/// In-memory store backed by a `HashMap`. Stands in for a real cache such
/// as Redis or memcached, which would satisfy the same contract.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, WordFrequency>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &WordFrequency)> {
        self.entries.iter()
    }
}

impl WordStore for InMemoryStore {
    fn exists(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    fn get(&self, url: &str) -> Option<&WordFrequency> {
        self.entries.get(url)
    }

    fn set(&mut self, url: String, words: WordFrequency) {
        self.entries.insert(url, words);
    }
}
