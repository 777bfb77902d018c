//! HTML document endpoint.
//!
//! Every path outside `/api/` and `/assets/` gets a complete document: the
//! routed page, or the not-found page with status 404.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::error::ServerError;
use crate::state::AppState;

/// Fallback handler for everything the router does not match.
pub(crate) async fn get_document(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = uri.path();
    if path.starts_with("/api/") {
        return ServerError::NotFound(path.to_owned()).into_response();
    }

    let document = state.site.render_document(path);
    let status = if document.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    (status, Html(document.html)).into_response()
}
