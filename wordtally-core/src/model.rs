use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrence counts for the normalized words found on one page.
pub type WordFrequency = HashMap<String, u64>;

/// The unit of pipeline output: one URL and the word counts extracted
/// from its body. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub url: String,
    pub words: WordFrequency,
}

impl ScrapeResult {
    pub fn new(url: String, words: WordFrequency) -> Self {
        Self { url, words }
    }

    /// Total number of counted word occurrences on the page.
    pub fn total_words(&self) -> u64 {
        self.words.values().sum()
    }

    /// Number of distinct normalized words on the page.
    pub fn distinct_words(&self) -> usize {
        self.words.len()
    }
}
