use crate::model::WordFrequency;
use crate::store::InMemoryStore;
use std::collections::BTreeMap;

/// Words for one URL ordered by count descending, ties alphabetical.
pub fn ranked_words(words: &WordFrequency) -> Vec<(&str, u64)> {
    let mut ranked: Vec<(&str, u64)> = words.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

/// Render the store contents as a plain-text report, showing at most `top`
/// words per URL. URLs are listed in lexicographic order so the report is
/// stable across runs.
pub fn frequency_report(store: &InMemoryStore, top: usize) -> String {
    let mut report = String::new();
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Pages scraped: {}\n\n", store.len()));

    let by_url: BTreeMap<&String, &WordFrequency> = store.iter().collect();

    for (url, words) in by_url {
        let total: u64 = words.values().sum();
        report.push_str(&format!("## {}\n", url));
        report.push_str(&format!(
            "  {} distinct words, {} total\n",
            words.len(),
            total
        ));

        for (word, count) in ranked_words(words).into_iter().take(top) {
            report.push_str(&format!("  {:>6}  {}\n", count, word));
        }
        report.push('\n');
    }

    report
}

/// Render the store contents as pretty-printed JSON keyed by URL. Word maps
/// are emitted in sorted order for stable output.
pub fn json_report(store: &InMemoryStore) -> serde_json::Result<String> {
    let by_url: BTreeMap<&String, BTreeMap<&String, u64>> = store
        .iter()
        .map(|(url, words)| (url, words.iter().map(|(w, c)| (w, *c)).collect()))
        .collect();
    serde_json::to_string_pretty(&by_url)
}
