use anyhow::{Context, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;
use wordtally_core::report::{frequency_report, json_report};
use wordtally_core::store::InMemoryStore;
use wordtally_scraper::fetch::HttpFetcher;
use wordtally_scraper::scrape::{Scraper, default_concurrency};

mod arguments;

use arguments::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Validation happens here at the front end; the pipeline treats URLs
    // as opaque identifiers.
    for url in &args.urls {
        Url::parse(url).with_context(|| format!("invalid URL: {}", url))?;
    }
    if args.timeout == 0 {
        bail!("timeout must be at least 1 second");
    }

    let concurrency = args.concurrency.unwrap_or_else(default_concurrency);
    info!(
        "Scraping {} URLs (concurrency {}, timeout {}s)",
        args.urls.len(),
        concurrency,
        args.timeout
    );

    let scraper = Scraper::new()
        .with_concurrency(concurrency)
        .with_fetcher(Arc::new(HttpFetcher::with_timeout(args.timeout)));

    let mut store = InMemoryStore::new();
    let summary = scraper.scrape(&args.urls, &mut store).await?;

    if args.json {
        println!("{}", json_report(&store)?);
    } else {
        print!("{}", frequency_report(&store, args.top));
        println!(
            "{} scraped, {} failed, {} skipped",
            summary.scraped, summary.failed, summary.skipped
        );
    }

    Ok(())
}
