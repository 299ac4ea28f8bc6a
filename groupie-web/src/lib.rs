//! groupie-web library - Groupie Tracker page server
//!
//! Server-rendered pages over the read-only artist API: artist listing,
//! artist detail, tour locations, concert dates and location/date relations.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod client;
pub mod error;
pub mod render;

pub use client::{FetchError, HttpSource, RecordSource};
pub use error::{PageError, PageResult};
pub use render::TemplateRegistry;

/// Application state shared across HTTP handlers
///
/// Everything here is immutable after startup; requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Remote artist API
    pub source: Arc<dyn RecordSource>,
    /// Page templates parsed at startup
    pub templates: Arc<TemplateRegistry>,
}

impl AppState {
    /// Create new application state
    pub fn new(source: Arc<dyn RecordSource>, templates: TemplateRegistry) -> Self {
        Self {
            source,
            templates: Arc::new(templates),
        }
    }
}

/// Build application router
///
/// Page routes match exact paths only; anything else is a plain-text 404.
/// `/static/*` is served from `static_dir`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(api::page_routes())
        .merge(api::health_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
