//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{Book, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    url: String,
    keywords: String,
    book: Option<Json<Book>>,
    created: DateTime<Utc>,
}

impl From<LinkRow> for ShortLink {
    fn from(r: LinkRow) -> Self {
        ShortLink::new(r.code, r.url, r.keywords, r.created).with_book(r.book.map(|b| b.0))
    }
}

/// PostgreSQL repository for short links.
///
/// The matched book is stored as a JSONB snapshot so that deleting a book
/// from the catalog leaves existing links untouched.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn get(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, url, keywords, book, created
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn save(&self, link: ShortLink) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO links (code, url, keywords, book, created)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (code) DO UPDATE
            SET url = EXCLUDED.url,
                keywords = EXCLUDED.keywords,
                book = EXCLUDED.book,
                created = EXCLUDED.created
            "#,
        )
        .bind(&link.code)
        .bind(&link.url)
        .bind(&link.keywords)
        .bind(link.book.map(Json))
        .bind(link.created)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, url, keywords, book, created
            FROM links
            ORDER BY created ASC, code ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }
}
