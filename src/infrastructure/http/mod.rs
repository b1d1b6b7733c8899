//! Outbound HTTP clients.
//!
//! - [`ReqwestPageFetcher`] - implements [`crate::domain::clients::PageFetcher`]
//! - [`HttpCompletionClient`] - implements [`crate::domain::clients::CompletionClient`]

mod completion_client;
mod page_fetcher;

pub use completion_client::HttpCompletionClient;
pub use page_fetcher::ReqwestPageFetcher;
