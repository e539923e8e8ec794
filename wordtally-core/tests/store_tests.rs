// Tests for the in-memory result store

use wordtally_core::model::{ScrapeResult, WordFrequency};
use wordtally_core::store::{InMemoryStore, WordStore};

fn freq(pairs: &[(&str, u64)]) -> WordFrequency {
    pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
}

// ============================================================================
// Store Contract Tests
// ============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = InMemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_exists_on_missing_url() {
    let store = InMemoryStore::new();
    assert!(!store.exists("http://example.com"));
}

#[test]
fn test_get_on_missing_url() {
    let store = InMemoryStore::new();
    assert!(store.get("http://example.com").is_none());
}

#[test]
fn test_set_then_get() {
    let mut store = InMemoryStore::new();
    store.set(
        "http://example.com".to_string(),
        freq(&[("hello", 2), ("world", 1)]),
    );

    let words = store.get("http://example.com").expect("entry should exist");
    assert_eq!(words.get("hello"), Some(&2));
    assert_eq!(words.get("world"), Some(&1));
    assert!(store.exists("http://example.com"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_set_replaces_previous_entry() {
    let mut store = InMemoryStore::new();
    store.set("http://example.com".to_string(), freq(&[("old", 1)]));
    store.set("http://example.com".to_string(), freq(&[("new", 3)]));

    let words = store.get("http://example.com").expect("entry should exist");
    assert!(words.get("old").is_none());
    assert_eq!(words.get("new"), Some(&3));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_entries_are_independent_per_url() {
    let mut store = InMemoryStore::new();
    store.set("http://a.example".to_string(), freq(&[("alpha", 1)]));
    store.set("http://b.example".to_string(), freq(&[("beta", 2)]));

    assert_eq!(store.len(), 2);
    assert_eq!(
        store.get("http://a.example").and_then(|w| w.get("alpha")),
        Some(&1)
    );
    assert_eq!(
        store.get("http://b.example").and_then(|w| w.get("beta")),
        Some(&2)
    );
}

#[test]
fn test_empty_frequency_table_still_counts_as_entry() {
    let mut store = InMemoryStore::new();
    store.set("http://blank.example".to_string(), WordFrequency::new());

    assert!(store.exists("http://blank.example"));
    assert_eq!(store.get("http://blank.example").map(|w| w.len()), Some(0));
}

// ============================================================================
// ScrapeResult Tests
// ============================================================================

#[test]
fn test_scrape_result_totals() {
    let result = ScrapeResult::new(
        "http://example.com".to_string(),
        freq(&[("the", 3), ("cat", 2)]),
    );
    assert_eq!(result.total_words(), 5);
    assert_eq!(result.distinct_words(), 2);
}

#[test]
fn test_scrape_result_empty_page() {
    let result = ScrapeResult::new("http://example.com".to_string(), WordFrequency::new());
    assert_eq!(result.total_words(), 0);
    assert_eq!(result.distinct_words(), 0);
}

#[test]
fn test_scrape_result_serializes_to_json() {
    let result = ScrapeResult::new("http://example.com".to_string(), freq(&[("word", 1)]));
    let json = serde_json::to_string(&result).expect("serialization should succeed");
    assert!(json.contains("http://example.com"));
    assert!(json.contains("word"));

    let back: ScrapeResult = serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(back.url, "http://example.com");
    assert_eq!(back.words.get("word"), Some(&1));
}
