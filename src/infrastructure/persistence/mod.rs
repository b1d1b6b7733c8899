//! Repository implementations, one set per storage backend.
//!
//! # PostgreSQL
//!
//! - [`PgBookRepository`] - `books` table, ordered by creation time
//! - [`PgLinkRepository`] - `links` table, matched book kept as JSONB
//!
//! # JSON files
//!
//! - [`JsonBookRepository`] - `books.json`, an array in insertion order
//! - [`JsonLinkRepository`] - `links.json`, an object keyed by code
//!
//! Both JSON repositories share one [`JsonStore`].

mod json_book_repository;
mod json_link_repository;
mod json_store;
mod pg_book_repository;
mod pg_link_repository;

pub use json_book_repository::JsonBookRepository;
pub use json_link_repository::JsonLinkRepository;
pub use json_store::{BOOKS_FILE, JsonStore, LINKS_FILE};
pub use pg_book_repository::PgBookRepository;
pub use pg_link_repository::PgLinkRepository;
