//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use tracing::debug;
use url::form_urlencoded;

use crate::api::dto::redirect::{REDIRECT_PAGE, RedirectPayload};
use crate::error::AppError;
use crate::state::AppState;

/// Sends the visitor to the redirect page with the link data attached.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with 307 to `/static/redirect.html?d=<json>`, where the JSON is
/// `{"originalUrl": "...", "book": {...} | null}`. The page shows the matched
/// book (if any) and then forwards to the original URL.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_link(&code).await?;

    let data = serde_json::to_string(&RedirectPayload::from(&link))
        .map_err(|e| AppError::internal("Failed to encode redirect", json!({ "reason": e.to_string() })))?;

    debug!(code = %code, matched = link.book.is_some(), "Redirecting");

    Ok(Redirect::temporary(&redirect_location(&data)))
}

fn redirect_location(data: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("d", data)
        .finish();
    format!("{REDIRECT_PAGE}?{query}")
}
