//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Book;
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BookRow {
    id: String,
    link: String,
    title: String,
    description: String,
    created: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book::new(r.id, r.link, r.title, r.description, r.created)
    }
}

/// PostgreSQL repository for the book catalog.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, link, title, description, created
            FROM books
            ORDER BY created ASC, id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn add(&self, book: Book) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, link, title, description, created)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&book.id)
        .bind(&book.link)
        .bind(&book.title)
        .bind(&book.description)
        .bind(book.created)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
