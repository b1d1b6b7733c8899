//! HTTP surface: the public shortening endpoint and the admin JSON API.
//!
//! Handlers stay thin. They validate input, call into
//! [`crate::application::services`], and map failures through
//! [`crate::error::AppError`].

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
