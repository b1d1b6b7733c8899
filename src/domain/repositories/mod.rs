//! Repository trait definitions for the domain layer.
//!
//! Both stores are deliberately narrow: the catalog is read as one ordered
//! list, and links are read and written whole (no partial updates).
//!
//! # Implementations
//!
//! Each trait has two implementations in `crate::infrastructure::persistence`,
//! one per storage backend (PostgreSQL and JSON files). The backend is picked
//! once at startup by [`crate::infrastructure::storage::StorageBackend`].
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod book_repository;
pub mod link_repository;

pub use book_repository::BookRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
