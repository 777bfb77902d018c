//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No API endpoint at the given path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No code sample at the given page and index.
    #[error("Sample {index} not found on page {page}")]
    SampleNotFound {
        /// Page path from the request.
        page: String,
        /// Sample index from the request.
        index: usize,
    },

    /// Asset not found at the given path.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Query string missing a parameter or holding a malformed one.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Not found", "path": path}),
            ),
            Self::SampleNotFound { page, index } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Sample not found", "page": page, "index": index}),
            ),
            Self::AssetNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Asset not found", "path": path}),
            ),
            Self::InvalidQuery(detail) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid query", "detail": detail}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
