//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code and book id generation, URL validation
//! - [`request_origin`] - Public origin (`scheme://host`) from HTTP headers

pub mod code_generator;
pub mod request_origin;
