//! Payload handed to the redirect page.

use serde::Serialize;

use crate::domain::entities::{Book, ShortLink};

/// Path of the static page that performs the final client-side redirect.
pub const REDIRECT_PAGE: &str = "/static/redirect.html";

/// Serialized into the `d` query parameter of [`REDIRECT_PAGE`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectPayload<'a> {
    pub original_url: &'a str,
    pub book: Option<&'a Book>,
}

impl<'a> From<&'a ShortLink> for RedirectPayload<'a> {
    fn from(link: &'a ShortLink) -> Self {
        Self {
            original_url: &link.url,
            book: link.book.as_ref(),
        }
    }
}
