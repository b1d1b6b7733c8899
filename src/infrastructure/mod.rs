//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Page fetching and the completion service client
//! - [`persistence`] - PostgreSQL and JSON file repositories
//! - [`storage`] - Backend selection at startup

pub mod http;
pub mod persistence;
pub mod storage;

pub use storage::StorageBackend;
