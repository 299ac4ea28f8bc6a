//! Page error types for groupie-web
//!
//! Every failure is terminal for its own request only and is reported as a
//! plain-text response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::client::FetchError;

/// Error raised while serving a page
#[derive(Debug, Error)]
pub enum PageError {
    /// Missing or non-integer `id` query parameter (400)
    #[error("Invalid artist ID")]
    InvalidId(String),

    /// Remote API unreachable (500)
    #[error("{0}")]
    Transport(#[from] FetchError),

    /// Remote payload could not be decoded (500)
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// No record with the requested ID (404)
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },

    /// Template missing or failed to render (500)
    #[error("{0}")]
    Template(String),

    /// No route for the requested path (404)
    #[error("Page not found")]
    PageNotFound,
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::InvalidId(_) => StatusCode::BAD_REQUEST,
            PageError::NotFound { .. } | PageError::PageNotFound => StatusCode::NOT_FOUND,
            PageError::Transport(_) | PageError::Decode(_) | PageError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            PageError::InvalidId(raw) => warn!(raw_id = %raw, "Rejected invalid artist ID"),
            PageError::NotFound { kind, id } => warn!(kind, id, "Record not found"),
            PageError::PageNotFound => {}
            _ => error!(status = status.as_u16(), "Page failed: {}", self),
        }

        (status, self.to_string()).into_response()
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;
