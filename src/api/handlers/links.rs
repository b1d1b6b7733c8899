//! Handler for the admin link listing.

use axum::{Json, extract::State};

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/admin/links`
///
/// Lists every short link, oldest first, with its matched book (or `null`
/// while matching is pending or found nothing).
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortLink>>, AppError> {
    Ok(Json(state.link_service.list_links().await?))
}
