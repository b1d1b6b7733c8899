//! Handlers for the admin catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::books::{AddBookRequest, AddBookResponse, SuccessResponse};
use crate::domain::entities::Book;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /api/admin/books`
///
/// ```json
/// { "link": "https://books.example/rust", "title": "Rust", "description": "..." }
/// ```
///
/// # Errors
///
/// Returns 400 if `link` or `title` is missing or blank.
pub async fn add_book_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddBookRequest>,
) -> Result<Json<AddBookResponse>, AppError> {
    payload.validate()?;

    let book = state.catalog_service.add_book(payload.into()).await?;

    Ok(Json(AddBookResponse {
        success: true,
        book,
    }))
}

/// `GET /api/admin/books`, oldest first.
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(state.catalog_service.list_books().await?))
}

/// `DELETE /api/admin/books/{id}`
///
/// Succeeds whether or not the id exists.
pub async fn delete_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.catalog_service.delete_book(&id).await?;
    Ok(Json(SuccessResponse { success: true }))
}
