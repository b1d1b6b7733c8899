//! Semantic matching through the external completion service.
//!
//! The service is an opaque black box. The only contract is "a plausible book
//! number or nothing": replies are parsed leniently and anything outside the
//! catalog range is treated as no answer.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::{MatchError, MatchStage};
use crate::domain::clients::CompletionClient;
use crate::domain::entities::{Book, ExtractedContent};

/// Picks a book by asking the completion service.
pub struct SemanticMatcher {
    client: Arc<dyn CompletionClient>,
}

impl SemanticMatcher {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Returns the book the service selected, or `None`.
    ///
    /// Never fails: network errors and unusable replies are logged.
    pub async fn match_book(
        &self,
        content: &ExtractedContent,
        books: &[Book],
        keywords: &str,
    ) -> Option<Book> {
        match self.try_match(content, books, keywords).await {
            Ok(book) => Some(book),
            Err(e) => {
                warn!(error = %e, "Semantic match produced no book");
                None
            }
        }
    }

    /// Returns the book the service selected.
    ///
    /// # Errors
    ///
    /// - [`MatchError::NoCandidates`] if `books` is empty (no request is sent)
    /// - [`MatchError::NetworkFailure`] if the service call fails
    /// - [`MatchError::MalformedResponse`] if the reply holds no number in
    ///   `1..=books.len()` (a reply of `0` lands here too)
    pub async fn try_match(
        &self,
        content: &ExtractedContent,
        books: &[Book],
        keywords: &str,
    ) -> Result<Book, MatchError> {
        if books.is_empty() {
            return Err(MatchError::NoCandidates);
        }

        let prompt = build_prompt(content, books, keywords);

        let reply =
            self.client
                .complete(&prompt)
                .await
                .map_err(|e| MatchError::NetworkFailure {
                    stage: MatchStage::Semantic,
                    reason: e.to_string(),
                })?;

        let selected = parse_selection(&reply)
            .filter(|n| (1..=books.len() as i64).contains(n))
            .ok_or_else(|| MatchError::MalformedResponse(reply.trim().to_string()))?;

        let book = books[(selected - 1) as usize].clone();
        info!(number = selected, title = %book.title, "Semantic match selected book");

        Ok(book)
    }
}

/// Numbered catalog listing, one `"<n>. <title> - <description>"` per line.
pub fn build_catalog_listing(books: &[Book]) -> String {
    books
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{}. {} - {}", i + 1, b.title, b.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the prompt sent to the completion service.
pub fn build_prompt(content: &ExtractedContent, books: &[Book], keywords: &str) -> String {
    format!(
        "Given this webpage content and keywords, which book is most relevant?\n\
         \n\
         URL Title: {title}\n\
         URL Description: {description}\n\
         URL Content: {excerpt}\n\
         User Keywords: {keywords}\n\
         \n\
         Available Books:\n\
         {listing}\n\
         \n\
         Reply ONLY with a single number from 0 to {count}: the number of the book that best \
         matches, or 0 if no book is a good match.",
        title = content.title,
        description = content.description,
        excerpt = content.excerpt,
        keywords = keywords,
        listing = build_catalog_listing(books),
        count = books.len(),
    )
}

/// Parses the leading integer of a free-form reply.
///
/// Leading whitespace is skipped, an optional sign is accepted, and anything
/// after the digits is ignored. Returns `None` if no digits lead the reply or
/// the number does not fit in an `i64`.
pub fn parse_selection(reply: &str) -> Option<i64> {
    let trimmed = reply.trim_start();

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}
