//! Short link creation, lookup, and match write-back.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{Book, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_target_url};

/// Service for creating and retrieving short links.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `url` with no matched book yet.
    ///
    /// Every call mints a fresh code; the same URL shortened twice yields two
    /// independent links, each with its own keywords and match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not `http(s)://...`.
    /// Returns [`AppError::Internal`] if no free code is found or storage fails.
    pub async fn shorten(&self, url: &str, keywords: Option<&str>) -> Result<ShortLink, AppError> {
        validate_target_url(url)?;

        let code = self.generate_unique_code().await?;
        let link = ShortLink::new(
            code,
            url.to_string(),
            keywords.unwrap_or_default().to_string(),
            Utc::now(),
        );

        self.link_repository.save(link.clone()).await?;
        info!(code = %link.code, url = %link.url, "Short link created");

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_link(&self, code: &str) -> Result<ShortLink, AppError> {
        self.link_repository
            .get(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists every link, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, AppError> {
        self.link_repository.list().await
    }

    /// Writes a match result onto the link stored under `code`.
    ///
    /// Re-reads the current record, replaces `book`, and saves it whole.
    /// There is no guard against a concurrent writer of the same code; codes
    /// are freshly minted and only the match worker updates them.
    ///
    /// Returns `Ok(false)` if the link no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn attach_book(&self, code: &str, book: Option<Book>) -> Result<bool, AppError> {
        let Some(link) = self.link_repository.get(code).await? else {
            debug!(code = %code, "Link vanished before match write-back");
            return Ok(false);
        };

        self.link_repository.save(link.with_book(book)).await?;
        Ok(true)
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, origin: &str, code: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), code)
    }

    /// Generates a short code not yet present in the store.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.link_repository.get(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
