//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;

pub use books::{add_book_handler, delete_book_handler, list_books_handler};
pub use health::health_handler;
pub use links::list_links_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
