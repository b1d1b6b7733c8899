//! Business logic services for the application layer.

pub mod catalog_service;
pub mod link_service;

pub use catalog_service::CatalogService;
pub use link_service::LinkService;
