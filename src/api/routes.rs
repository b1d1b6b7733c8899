//! API route configuration.

use crate::api::handlers::{
    add_book_handler, delete_book_handler, list_books_handler, list_links_handler,
    shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// Admin routes, to be wrapped in [`crate::api::middleware::admin_auth::layer`].
///
/// # Endpoints
///
/// - `GET    /books`       - List catalog books
/// - `POST   /books`       - Add a book
/// - `DELETE /books/{id}`  - Delete a book
/// - `GET    /links`       - List short links with their matched books
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(add_book_handler))
        .route("/books/{id}", delete(delete_book_handler))
        .route("/links", get(list_links_handler))
}
