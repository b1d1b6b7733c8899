//! Core domain entities.
//!
//! - [`Book`] - A curated catalog entry a short link may be associated with
//! - [`ShortLink`] - A generated code mapping to a target URL
//! - [`ExtractedContent`] - Signal scraped from a target page for matching
//!
//! `Book` and `ShortLink` serialize with the field names of the JSON data
//! files (`books.json`, `links.json`) and the public API.

pub mod book;
pub mod extracted_content;
pub mod short_link;

pub use book::{Book, NewBook};
pub use extracted_content::{EXCERPT_MAX_CHARS, ExtractedContent};
pub use short_link::ShortLink;
