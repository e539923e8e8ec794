use crate::error::Result;
use crate::extract::TextExtractor;
use crate::fetch::{Fetcher, HttpFetcher};
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, info, warn};
use wordtally_core::{ScrapeResult, WordStore};

/// Default concurrency budget: one parallel execution unit is left free
/// for I/O-bound work, and the budget is never below one.
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
        .saturating_sub(1)
        .max(1)
}

/// Outcome counts for one scrape invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// URLs for which a task was launched.
    pub attempted: usize,
    /// URLs whose results were written to the store.
    pub scraped: usize,
    /// URLs whose fetch failed.
    pub failed: usize,
    /// URLs skipped because the store already had an entry.
    pub skipped: usize,
}

/// Runs the fetch/extract/aggregate pipeline over a set of URLs.
///
/// One task per URL, gated by a counting semaphore sized to the
/// concurrency budget. Results funnel through a multi-producer channel;
/// the channel is drained only after every task has joined, so the single
/// drain sees every emitted result and the store needs no locking.
pub struct Scraper {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<TextExtractor>,
    concurrency: usize,
}

impl Scraper {
    pub fn new() -> Self {
        Self {
            fetcher: Arc::new(HttpFetcher::new()),
            extractor: Arc::new(TextExtractor::new()),
            concurrency: default_concurrency(),
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_extractor(mut self, extractor: TextExtractor) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Scrape `urls` and commit the word counts to `store`.
    ///
    /// A failed fetch affects only its own URL: it is logged and the URL
    /// is simply absent from the store. URLs already present in the store
    /// are not fetched again.
    pub async fn scrape(&self, urls: &[String], store: &mut dyn WordStore) -> Result<ScrapeSummary> {
        info!(
            "Scraping {} URLs with concurrency {}",
            urls.len(),
            self.concurrency
        );

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        // One slot per task, so a send can never block.
        let (tx, mut rx) = mpsc::channel::<ScrapeResult>(urls.len().max(1));

        let mut handles = Vec::new();
        let mut skipped = 0;

        for url in urls {
            if store.exists(url) {
                debug!("Skipping {}: already in store", url);
                skipped += 1;
                continue;
            }

            let url = url.clone();
            let semaphore = semaphore.clone();
            let fetcher = self.fetcher.clone();
            let extractor = self.extractor.clone();
            let tx = tx.clone();

            handles.push(tokio::spawn(async move {
                // Dropped on every exit path, releasing the budget unit.
                // The semaphore is never closed while tasks are live.
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };

                let body = match fetcher.fetch(&url).await {
                    Ok(body) => body,
                    Err(e) => {
                        warn!("Fetch failed for {}: {}", url, e);
                        return;
                    }
                };

                let words = extractor.word_frequencies(&body);
                let _ = tx.send(ScrapeResult::new(url, words)).await;
            }));
        }
        drop(tx);

        let attempted = handles.len();

        // Completion barrier: every task has finished before the channel
        // is treated as exhausted, so no result can be lost and no send
        // can race the drain.
        for outcome in futures::future::join_all(handles).await {
            outcome?;
        }

        let mut scraped = 0;
        while let Some(result) = rx.recv().await {
            debug!(
                "Storing {} ({} distinct words)",
                result.url,
                result.words.len()
            );
            store.set(result.url, result.words);
            scraped += 1;
        }

        let summary = ScrapeSummary {
            attempted,
            scraped,
            failed: attempted - scraped,
            skipped,
        };
        info!(
            "Scrape complete: {} stored, {} failed, {} skipped",
            summary.scraped, summary.failed, summary.skipped
        );
        Ok(summary)
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new()
    }
}
