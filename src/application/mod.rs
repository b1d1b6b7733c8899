//! Application layer: business logic and background processing.
//!
//! - [`services::LinkService`] - Short link creation, lookup, and match write-back
//! - [`services::CatalogService`] - Catalog book management
//! - [`matching`] - The link-to-catalog matching pipeline
//! - [`match_worker`] - Bounded queue and worker that run matching in the background

pub mod match_worker;
pub mod matching;
pub mod services;
