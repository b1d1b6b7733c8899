//! Short code and identifier generation.
//!
//! Codes and ids are drawn uniformly from the 64-character URL-safe alphabet
//! `A-Z a-z 0-9 _ -`, so they can be used in paths without escaping.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// URL-safe alphabet shared by short codes and book ids.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of generated short codes.
pub const SHORT_CODE_LENGTH: usize = 7;

/// Length of generated book ids.
pub const BOOK_ID_LENGTH: usize = 10;

static HTTP_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://.+").unwrap());

/// Generates a random identifier of `len` URL-safe characters.
pub fn generate_id(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates a random 7-character short code.
pub fn generate_code() -> String {
    generate_id(SHORT_CODE_LENGTH)
}

/// Generates a random 10-character book id.
pub fn generate_book_id() -> String {
    generate_id(BOOK_ID_LENGTH)
}

/// Checks that a target URL starts with `http://` or `https://` and has
/// something after the scheme.
///
/// # Errors
///
/// Returns [`AppError::Validation`] otherwise.
pub fn validate_target_url(url: &str) -> Result<(), AppError> {
    if HTTP_URL_REGEX.is_match(url) {
        Ok(())
    } else {
        Err(AppError::bad_request("Invalid URL", json!({ "url": url })))
    }
}
