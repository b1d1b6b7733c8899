//! JSON-file implementation of the book repository.

use std::sync::Arc;

use async_trait::async_trait;

use super::json_store::{BOOKS_FILE, JsonStore};
use crate::domain::entities::Book;
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Books stored as an array in `books.json`, in insertion order.
pub struct JsonBookRepository {
    store: Arc<JsonStore>,
}

impl JsonBookRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let _guard = self.store.lock().await;
        Ok(self.store.read_or_default(BOOKS_FILE).await)
    }

    async fn add(&self, book: Book) -> Result<(), AppError> {
        let _guard = self.store.lock().await;
        let mut books: Vec<Book> = self.store.read(BOOKS_FILE).await?;
        books.push(book);
        self.store.write(BOOKS_FILE, &books).await
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let _guard = self.store.lock().await;
        let mut books: Vec<Book> = self.store.read(BOOKS_FILE).await?;
        let before = books.len();
        books.retain(|b| b.id != id);

        if books.len() == before {
            return Ok(false);
        }

        self.store.write(BOOKS_FILE, &books).await?;
        Ok(true)
    }
}
