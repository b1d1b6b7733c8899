//! Domain layer containing business entities and the contracts the rest of
//! the service is built against.
//!
//! # Architecture
//!
//! - [`entities`] - Books, short links, and extracted page content
//! - [`repositories`] - Storage traits (implemented in `crate::infrastructure::persistence`)
//! - [`clients`] - Outbound HTTP traits (implemented in `crate::infrastructure::http`)
//! - [`match_job`] - Background matching request model
//!
//! # Matching Flow
//!
//! 1. `POST /api/shorten` stores a [`entities::ShortLink`] with no book
//! 2. A [`match_job::MatchJob`] is pushed onto the bounded match queue
//! 3. [`crate::application::match_worker::run_match_worker`] resolves a book
//! 4. The book snapshot is written back through [`repositories::LinkRepository`]

pub mod clients;
pub mod entities;
pub mod match_job;
pub mod repositories;
