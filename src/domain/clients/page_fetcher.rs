//! Contract for fetching remote pages.

use async_trait::async_trait;

/// Errors raised while fetching a page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("timed out fetching {url}")]
    Timeout { url: String },

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("failed to read body of {url}: {reason}")]
    Body { url: String, reason: String },
}

/// Downloads a page and returns its body as text.
///
/// Any status code is accepted: error pages are still text worth scraping.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
