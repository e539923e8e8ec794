use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Fetch primitive used by the scrape pipeline. Implementations must be
/// safe to call concurrently from many tasks.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the body of `url`. A transport failure or a non-success
    /// status is an error; on error no resource is left open.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by a pooled `reqwest` client. The request timeout
/// bounds how long a stalled fetch can hold a concurrency permit.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Wordtally/0.1")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .pool_idle_timeout(Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_bytes(b"<html><body><p>hello</p></body></html>"),
            )
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new();
        let body = fetcher.fetch(&mock_server.uri()).await.unwrap();
        assert!(body.contains("<p>hello</p>"));
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new();
        let result = fetcher
            .fetch(&format!("{}/missing", mock_server.uri()))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_failure() {
        // Port 1 is never listening.
        let fetcher = HttpFetcher::with_timeout(2);
        let result = fetcher.fetch("http://127.0.0.1:1/").await;
        assert!(result.is_err());
    }
}
