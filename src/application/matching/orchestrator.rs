//! Sequencing of the matching stages.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::MatchError;
use super::extractor::ContentExtractor;
use super::heuristic;
use super::semantic::SemanticMatcher;
use crate::domain::clients::{CompletionClient, PageFetcher};
use crate::domain::entities::Book;
use crate::domain::repositories::BookRepository;

/// Stage that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Semantic,
    Heuristic,
    /// Nothing matched; the newest book was attached anyway.
    Newest,
}

impl MatchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Heuristic => "heuristic",
            Self::Newest => "newest",
        }
    }
}

/// A resolved book together with the stage that picked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub book: Book,
    pub source: MatchSource,
}

/// Runs the matching stages in order for one target URL.
///
/// # Algorithm
///
/// 1. Load the catalog; if it is empty, stop (the page is never fetched)
/// 2. Extract page content
/// 3. Semantic match; stop on success
/// 4. Heuristic match; stop on success
/// 5. Fall back to the last book the catalog store lists
///
/// The orchestrator never writes: persisting the result onto the short link
/// is done by [`crate::application::services::LinkService::attach_book`].
pub struct MatchOrchestrator {
    books: Arc<dyn BookRepository>,
    extractor: ContentExtractor,
    semantic: SemanticMatcher,
}

impl MatchOrchestrator {
    pub fn new(
        books: Arc<dyn BookRepository>,
        fetcher: Arc<dyn PageFetcher>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            books,
            extractor: ContentExtractor::new(fetcher),
            semantic: SemanticMatcher::new(completion),
        }
    }

    /// Returns the book to attach to a link for `url`, or `None` when the
    /// catalog is empty or cannot be read.
    pub async fn match_book(&self, url: &str, keywords: &str) -> Option<Book> {
        match self.resolve(url, keywords).await {
            Ok(outcome) => Some(outcome.book),
            Err(e) => {
                info!(url = %url, error = %e, "No book matched");
                None
            }
        }
    }

    /// Runs the pipeline and reports which stage decided.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoCandidates`] if the catalog is empty or could
    /// not be loaded. Every other stage failure falls through to the next
    /// stage.
    pub async fn resolve(&self, url: &str, keywords: &str) -> Result<MatchOutcome, MatchError> {
        let books = match self.books.list().await {
            Ok(books) => books,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to load catalog for matching");
                Vec::new()
            }
        };

        let Some(newest) = books.last().cloned() else {
            return Err(MatchError::NoCandidates);
        };

        let content = self.extractor.extract(url).await;
        if content.is_empty() {
            debug!(url = %url, "No page content extracted, matching on keywords only");
        }

        let outcome = if let Some(book) = self.semantic.match_book(&content, &books, keywords).await
        {
            MatchOutcome {
                book,
                source: MatchSource::Semantic,
            }
        } else if let Some(book) = heuristic::match_book(&content, &books, keywords) {
            MatchOutcome {
                book,
                source: MatchSource::Heuristic,
            }
        } else {
            info!(url = %url, title = %newest.title, "No match found, using newest book");
            MatchOutcome {
                book: newest,
                source: MatchSource::Newest,
            }
        };

        metrics::counter!("booklink_matches_total", "source" => outcome.source.as_str())
            .increment(1);

        Ok(outcome)
    }
}
