//! Contract for the external text-generation service.

use async_trait::async_trait;

/// Errors raised while calling the completion service.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,

    #[error("completion request failed: {0}")]
    Request(String),

    #[error("invalid completion endpoint: {0}")]
    Endpoint(String),
}

/// Sends a natural-language prompt and returns the raw text reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
