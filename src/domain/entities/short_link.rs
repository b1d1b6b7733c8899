//! Short link entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Book;

/// A shortened URL with its (optional) matched catalog book.
///
/// Created with `book: None`. The background matcher sets `book` at most once,
/// always to a complete [`Book`] snapshot or to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub code: String,
    pub url: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub book: Option<Book>,
    pub created: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a link that has not been matched yet.
    pub fn new(code: String, url: String, keywords: String, created: DateTime<Utc>) -> Self {
        Self {
            code,
            url,
            keywords,
            book: None,
            created,
        }
    }

    /// Returns a copy of this link with `book` replaced.
    pub fn with_book(mut self, book: Option<Book>) -> Self {
        self.book = book;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new(
            "b1".to_string(),
            "https://books.example/b1".to_string(),
            "Title".to_string(),
            "Description".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_new_link_has_no_book() {
        let link = ShortLink::new(
            "abc1234".to_string(),
            "https://example.com".to_string(),
            String::new(),
            Utc::now(),
        );

        assert_eq!(link.code, "abc1234");
        assert!(link.book.is_none());
        assert!(link.keywords.is_empty());
    }

    #[test]
    fn test_with_book_sets_full_snapshot() {
        let book = sample_book();
        let link = ShortLink::new(
            "abc1234".to_string(),
            "https://example.com".to_string(),
            "rust".to_string(),
            Utc::now(),
        )
        .with_book(Some(book.clone()));

        assert_eq!(link.book, Some(book));
    }

    #[test]
    fn test_serializes_null_book() {
        let link = ShortLink::new(
            "abc1234".to_string(),
            "https://example.com".to_string(),
            String::new(),
            Utc::now(),
        );

        let value = serde_json::to_value(&link).unwrap();
        assert!(value["book"].is_null());
        assert_eq!(value["url"], "https://example.com");
    }
}
