//! Repository trait for the book catalog.

use crate::domain::entities::Book;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for catalog books.
///
/// # Ordering
///
/// [`BookRepository::list`] returns books oldest first. The matcher relies on
/// this: when nothing else matches it attaches the *last* listed book.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`]
/// - [`crate::infrastructure::persistence::JsonBookRepository`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Lists every book in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Appends a book to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn add(&self, book: Book) -> Result<(), AppError>;

    /// Deletes a book by id.
    ///
    /// Returns `Ok(true)` if a book was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
