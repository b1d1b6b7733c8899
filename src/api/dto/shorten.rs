//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// `url` defaults to empty so a missing field is reported as an invalid URL
/// rather than a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,

    /// Free-text hints for the book matcher.
    #[validate(length(max = 500, message = "Keywords are too long"))]
    pub keywords: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
}
