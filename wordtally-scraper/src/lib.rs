pub mod error;
pub mod extract;
pub mod fetch;
pub mod scrape;

pub use error::{Result, ScrapeError};
pub use extract::TextExtractor;
pub use fetch::{Fetcher, HttpFetcher};
pub use scrape::{ScrapeSummary, Scraper};
