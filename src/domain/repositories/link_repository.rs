//! Repository trait for short link storage.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short links.
///
/// Links are keyed by their code and always written whole: updating the
/// matched book is a read-modify-write through [`LinkRepository::get`] and
/// [`LinkRepository::save`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`]
/// - [`crate::infrastructure::persistence::JsonLinkRepository`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Inserts or fully overwrites the link stored under `link.code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, link: ShortLink) -> Result<(), AppError>;

    /// Lists all links, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<ShortLink>, AppError>;
}
