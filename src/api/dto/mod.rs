//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Link listings serialize
//! [`crate::domain::entities::ShortLink`] directly.

pub mod books;
pub mod health;
pub mod redirect;
pub mod shorten;
