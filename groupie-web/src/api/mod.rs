//! HTTP handlers for groupie-web

pub mod health;
pub mod pages;

pub use health::health_routes;
pub use pages::{not_found, page_routes};
