//! Outbound HTTP contracts used by the matching pipeline.
//!
//! - [`PageFetcher`] - downloads a target page as text
//! - [`CompletionClient`] - asks the text-generation service for a reply
//!
//! Implementations live in `crate::infrastructure::http`. Both are expected to
//! enforce their own timeouts; callers never retry.

pub mod completion_client;
pub mod page_fetcher;

pub use completion_client::{CompletionClient, CompletionError};
pub use page_fetcher::{FetchError, PageFetcher};

#[cfg(test)]
pub use completion_client::MockCompletionClient;
#[cfg(test)]
pub use page_fetcher::MockPageFetcher;
