//! Client for a text-generation service addressed as `GET {base}/{prompt}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::domain::clients::{CompletionClient, CompletionError};

/// Sends the prompt as a single percent-encoded path segment and returns the
/// response body verbatim.
pub struct HttpCompletionClient {
    client: Client,
    base_url: Url,
}

impl HttpCompletionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CompletionError> {
        let base_url =
            Url::parse(base_url).map_err(|e| CompletionError::Endpoint(e.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(CompletionError::Endpoint(format!(
                "{base_url} cannot carry a path"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::Request(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Builds the request URL for `prompt`.
    pub fn prompt_url(&self, prompt: &str) -> Result<Url, CompletionError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CompletionError::Endpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .push(prompt);
        Ok(url)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> CompletionError {
    if e.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::Request(e.to_string())
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = self.prompt_url(prompt)?;
        debug!(prompt_len = prompt.len(), "Requesting completion");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Request(format!("HTTP {status}")));
        }

        response.text().await.map_err(map_reqwest_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_single_encoded_segment() {
        let client =
            HttpCompletionClient::new("https://text.example.com", Duration::from_secs(1)).unwrap();

        let url = client.prompt_url("which book? 1/2 & more").unwrap();

        assert_eq!(url.host_str(), Some("text.example.com"));
        assert_eq!(url.path_segments().unwrap().count(), 1);
        assert!(!url.path().contains(' '));
        assert!(url.path().contains("%2F"));
        assert!(url.query().is_none());
    }

    #[test]
    fn test_base_path_is_kept() {
        let client =
            HttpCompletionClient::new("http://127.0.0.1:9000/complete/", Duration::from_secs(1))
                .unwrap();

        let url = client.prompt_url("hi").unwrap();
        assert_eq!(url.path(), "/complete/hi");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpCompletionClient::new("not a url", Duration::from_secs(1));
        assert!(matches!(err, Err(CompletionError::Endpoint(_))));

        let err = HttpCompletionClient::new("mailto:x@example.com", Duration::from_secs(1));
        assert!(matches!(err, Err(CompletionError::Endpoint(_))));
    }
}
