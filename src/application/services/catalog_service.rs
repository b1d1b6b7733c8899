//! Catalog book management.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_book_id;

/// Service for adding, listing, and deleting catalog books.
pub struct CatalogService {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogService {
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }

    /// Adds a book with a fresh id and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `link` or `title` is blank.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn add_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        let link = new_book.link.trim();
        let title = new_book.title.trim();

        if link.is_empty() || title.is_empty() {
            return Err(AppError::bad_request(
                "Link and title required",
                json!({ "link": link.is_empty(), "title": title.is_empty() }),
            ));
        }

        let book = Book::new(
            generate_book_id(),
            link.to_string(),
            title.to_string(),
            new_book.description.unwrap_or_default(),
            Utc::now(),
        );

        self.book_repository.add(book.clone()).await?;
        info!(id = %book.id, title = %book.title, "Book added to catalog");

        Ok(book)
    }

    /// Lists the catalog in store order (oldest first).
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.book_repository.list().await
    }

    /// Deletes a book. Deleting an unknown id is not an error.
    ///
    /// Returns whether a book was actually removed.
    pub async fn delete_book(&self, id: &str) -> Result<bool, AppError> {
        let removed = self.book_repository.delete(id).await?;
        if removed {
            info!(id = %id, "Book deleted from catalog");
        }
        Ok(removed)
    }
}
