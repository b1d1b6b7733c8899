//! Deterministic word-overlap matching.
//!
//! Used when the completion service is down or non-committal. A book scores
//! one point for every word of its title and description that is at least
//! [`MIN_TOKEN_CHARS`] characters long and appears anywhere in the page text
//! or the user's keywords. Matching is substring based, so "program" in a book
//! title also hits "programming" on the page.

use tracing::{debug, info};

use super::error::MatchError;
use crate::domain::entities::{Book, ExtractedContent};

/// Words shorter than this never score.
pub const MIN_TOKEN_CHARS: usize = 4;

/// A book must score strictly more than this to be selected.
pub const CONFIDENCE_THRESHOLD: usize = 2;

/// Lowercased text the book words are searched in.
pub fn build_haystack(content: &ExtractedContent, keywords: &str) -> String {
    format!(
        "{} {} {} {}",
        content.title, content.description, content.excerpt, keywords
    )
    .to_lowercase()
}

/// Scores one book against a haystack built by [`build_haystack`].
pub fn score_book(haystack: &str, book: &Book) -> usize {
    let book_text = format!("{} {}", book.title, book.description).to_lowercase();

    book_text
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS && haystack.contains(word))
        .count()
}

/// Returns the highest-scoring book and its score.
///
/// Ties keep the earliest book. Returns `None` when no book scores above zero.
pub fn best_candidate<'a>(
    content: &ExtractedContent,
    books: &'a [Book],
    keywords: &str,
) -> Option<(&'a Book, usize)> {
    let haystack = build_haystack(content, keywords);

    let mut best: Option<(&Book, usize)> = None;
    for book in books {
        let score = score_book(&haystack, book);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((book, score));
        }
    }

    best
}

/// Returns the best book if its score clears [`CONFIDENCE_THRESHOLD`].
///
/// # Errors
///
/// - [`MatchError::NoCandidates`] if `books` is empty
/// - [`MatchError::NoConfidentMatch`] if the best score is too low
pub fn try_match(
    content: &ExtractedContent,
    books: &[Book],
    keywords: &str,
) -> Result<Book, MatchError> {
    if books.is_empty() {
        return Err(MatchError::NoCandidates);
    }

    match best_candidate(content, books, keywords) {
        Some((book, score)) if score > CONFIDENCE_THRESHOLD => {
            info!(title = %book.title, score, "Heuristic match selected book");
            Ok(book.clone())
        }
        other => Err(MatchError::NoConfidentMatch {
            best: other.map_or(0, |(_, s)| s),
            threshold: CONFIDENCE_THRESHOLD,
        }),
    }
}

/// Infallible form of [`try_match`].
pub fn match_book(content: &ExtractedContent, books: &[Book], keywords: &str) -> Option<Book> {
    match try_match(content, books, keywords) {
        Ok(book) => Some(book),
        Err(e) => {
            debug!(error = %e, "Heuristic match produced no book");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(id: &str, title: &str, description: &str) -> Book {
        Book::new(
            id.to_string(),
            format!("https://books.example/{}", id),
            title.to_string(),
            description.to_string(),
            Utc::now(),
        )
    }

    fn titled(title: &str) -> ExtractedContent {
        ExtractedContent {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Book> {
        vec![
            book("go", "Go Programming", "systems language"),
            book("rust", "Rust Book", "memory safety"),
        ]
    }

    #[test]
    fn test_reference_fixture_scores() {
        let books = catalog();
        let haystack = build_haystack(&titled("Learn systems language programming"), "");

        assert_eq!(score_book(&haystack, &books[0]), 3);
        assert_eq!(score_book(&haystack, &books[1]), 0);
    }

    #[test]
    fn test_reference_fixture_selects_first_book() {
        let selected = match_book(&titled("Learn systems language programming"), &catalog(), "");
        assert_eq!(selected.unwrap().id, "go");
    }

    #[test]
    fn test_score_of_two_is_not_enough() {
        let content = titled("Learn systems language");
        let books = catalog();

        let (best, score) = best_candidate(&content, &books, "").unwrap();
        assert_eq!(best.id, "go");
        assert_eq!(score, 2);

        let err = try_match(&content, &books, "").unwrap_err();
        assert!(matches!(
            err,
            MatchError::NoConfidentMatch {
                best: 2,
                threshold: 2
            }
        ));
    }

    #[test]
    fn test_short_words_never_score() {
        let books = vec![book("a", "The Art of War", "war and art")];
        let haystack = build_haystack(&titled("the art of war and art"), "");

        assert_eq!(score_book(&haystack, &books[0]), 0);
    }

    #[test]
    fn test_substring_matching() {
        let books = vec![book("p", "Program", "")];
        let haystack = build_haystack(&titled("programming"), "");

        assert_eq!(score_book(&haystack, &books[0]), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let books = vec![book("r", "RUST", "")];
        let haystack = build_haystack(&titled("rust"), "");

        assert_eq!(score_book(&haystack, &books[0]), 1);
    }

    #[test]
    fn test_keywords_contribute_to_score() {
        let books = catalog();
        let content = ExtractedContent::default();

        assert!(match_book(&content, &books, "").is_none());
        let selected = match_book(&content, &books, "rust memory safety");
        assert_eq!(selected.unwrap().id, "rust");
    }

    #[test]
    fn test_description_and_excerpt_contribute() {
        let content = ExtractedContent {
            title: String::new(),
            description: "memory".to_string(),
            excerpt: "safety first in rust".to_string(),
        };

        assert_eq!(match_book(&content, &catalog(), "").unwrap().id, "rust");
    }

    #[test]
    fn test_repeated_words_count_each_time() {
        let books = vec![book("d", "Data data data", "")];
        let haystack = build_haystack(&titled("data"), "");

        assert_eq!(score_book(&haystack, &books[0]), 3);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let books = vec![
            book("first", "alpha bravo charlie", ""),
            book("second", "charlie bravo alpha", ""),
        ];
        let content = titled("alpha bravo charlie");

        let (best, score) = best_candidate(&content, &books, "").unwrap();
        assert_eq!(best.id, "first");
        assert_eq!(score, 3);
    }

    #[test]
    fn test_later_higher_score_replaces_best() {
        let books = vec![
            book("low", "alpha bravo charlie", ""),
            book("high", "alpha bravo charlie delta", ""),
        ];
        let content = titled("alpha bravo charlie delta");

        assert_eq!(match_book(&content, &books, "").unwrap().id, "high");
    }

    #[test]
    fn test_no_overlap_returns_none() {
        assert!(best_candidate(&titled("cooking recipes"), &catalog(), "").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let err = try_match(&titled("anything"), &[], "").unwrap_err();
        assert!(matches!(err, MatchError::NoCandidates));
    }

    #[test]
    fn test_deterministic() {
        let books = vec![
            book("a", "alpha bravo charlie", "delta"),
            book("b", "alpha bravo", "charlie delta echo"),
        ];
        let content = titled("alpha bravo charlie delta echo");

        let first = best_candidate(&content, &books, "kw").map(|(b, s)| (b.id.clone(), s));
        for _ in 0..10 {
            let again = best_candidate(&content, &books, "kw").map(|(b, s)| (b.id.clone(), s));
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_never_returns_low_scoring_book() {
        let books = vec![book("x", "alpha bravo charlie delta", "")];
        for title in ["", "alpha", "alpha bravo", "bravo charlie"] {
            assert!(match_book(&titled(title), &books, "").is_none());
        }
        assert!(match_book(&titled("alpha bravo charlie"), &books, "").is_some());
    }
}
