//! Page fetching and best-effort text extraction.
//!
//! Extraction is pattern based, not a real HTML parse. Unusual or broken
//! markup degrades to empty fields instead of failing.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, warn};

use super::error::{MatchError, MatchStage};
use crate::domain::clients::PageFetcher;
use crate::domain::entities::{EXCERPT_MAX_CHARS, ExtractedContent};

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").unwrap());

static DESCRIPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+name=["']description["'][^>]+content=["']([^"']+)["']"#).unwrap()
});

static SCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

static STYLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Fetches target pages and extracts [`ExtractedContent`] from them.
pub struct ContentExtractor {
    fetcher: Arc<dyn PageFetcher>,
}

impl ContentExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetches `url` and extracts its content.
    ///
    /// Never fails: any fetch error is logged and yields the all-empty value.
    pub async fn extract(&self, url: &str) -> ExtractedContent {
        match self.try_extract(url).await {
            Ok(content) => content,
            Err(e) => {
                warn!(url = %url, error = %e, "Content extraction failed");
                ExtractedContent::default()
            }
        }
    }

    /// Fetches `url` and extracts its content, reporting fetch failures.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NetworkFailure`] if the page could not be fetched.
    pub async fn try_extract(&self, url: &str) -> Result<ExtractedContent, MatchError> {
        let html = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| MatchError::NetworkFailure {
                stage: MatchStage::Extraction,
                reason: e.to_string(),
            })?;

        let content = extract_content(&html);
        debug!(
            url = %url,
            title = %content.title,
            excerpt_chars = content.excerpt.chars().count(),
            "Extracted page content"
        );

        Ok(content)
    }
}

/// Extracts title, description, and excerpt from raw HTML.
pub fn extract_content(html: &str) -> ExtractedContent {
    ExtractedContent {
        title: extract_title(html),
        description: extract_description(html),
        excerpt: extract_excerpt(html),
    }
}

/// Inner text of the first `<title>` element, trimmed.
pub fn extract_title(html: &str) -> String {
    TITLE_REGEX
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// `content` of the first `<meta name="description">` tag, trimmed.
pub fn extract_description(html: &str) -> String {
    DESCRIPTION_REGEX
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Visible text with scripts, styles, and tags removed, whitespace collapsed,
/// cut to [`EXCERPT_MAX_CHARS`] characters.
pub fn extract_excerpt(html: &str) -> String {
    let text = SCRIPT_REGEX.replace_all(html, "");
    let text = STYLE_REGEX.replace_all(&text, "");
    let text = TAG_REGEX.replace_all(&text, " ");
    let text = WHITESPACE_REGEX.replace_all(&text, " ");

    text.trim().chars().take(EXCERPT_MAX_CHARS).collect()
}
