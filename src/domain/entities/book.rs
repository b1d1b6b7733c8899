//! Catalog book entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A curated catalog entry.
///
/// Books are immutable once created; the only mutation is an explicit delete.
/// Short links keep a full snapshot of the matched book, so deleting a book
/// does not detach it from links that already reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub link: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created: DateTime<Utc>,
}

impl Book {
    /// Creates a new Book instance.
    pub fn new(
        id: String,
        link: String,
        title: String,
        description: String,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            link,
            title,
            description,
            created,
        }
    }
}

/// Input data for adding a book to the catalog.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub link: String,
    pub title: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_creation() {
        let now = Utc::now();
        let book = Book::new(
            "abcdefghij".to_string(),
            "https://books.example/rust".to_string(),
            "Rust Book".to_string(),
            "memory safety".to_string(),
            now,
        );

        assert_eq!(book.id, "abcdefghij");
        assert_eq!(book.title, "Rust Book");
        assert_eq!(book.created, now);
    }

    #[test]
    fn test_book_json_shape() {
        let book = Book::new(
            "id1".to_string(),
            "https://books.example/go".to_string(),
            "Go Programming".to_string(),
            "systems language".to_string(),
            "2024-05-01T10:00:00Z".parse().unwrap(),
        );

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["id"], "id1");
        assert_eq!(value["link"], "https://books.example/go");
        assert_eq!(value["title"], "Go Programming");
        assert_eq!(value["description"], "systems language");
        assert_eq!(value["created"], "2024-05-01T10:00:00Z");
    }

    #[test]
    fn test_book_missing_description_defaults_to_empty() {
        let book: Book = serde_json::from_value(json!({
            "id": "id2",
            "link": "https://books.example/x",
            "title": "X",
            "created": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(book.description, "");
    }
}
