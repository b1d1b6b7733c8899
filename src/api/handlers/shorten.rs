//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::match_job::MatchJob;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;

/// Creates a short link and schedules book matching for it.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/article", "keywords": "rust async" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://sho.rt/Ab3_x9Q", "shortCode": "Ab3_x9Q" }
/// ```
///
/// The response is sent as soon as the link is stored. Matching runs later on
/// the match worker; if the queue is full the link simply stays unmatched.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing, not `http(s)://`, or the
/// `Host` header is absent.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let origin = request_origin(&headers)?;

    let link = state
        .link_service
        .shorten(&payload.url, payload.keywords.as_deref())
        .await?;

    state
        .match_queue
        .enqueue(MatchJob::new(&link.code, &link.url, &link.keywords));

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&origin, &link.code),
        short_code: link.code,
    }))
}
