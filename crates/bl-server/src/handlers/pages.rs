//! Pages API endpoint.
//!
//! Returns the rendered page for a path as JSON: metadata, breadcrumbs,
//! table of contents and HTML content. Paths without a route answer 404 with
//! the not-found page in the same shape, so the client can swap it in.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bl_renderer::TocEntry;
use bl_site::Crumb;
use md5::{Digest, Md5};
use serde::Serialize;

use crate::handlers::to_site_path;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse<'a> {
    /// Page metadata.
    meta: PageMeta<'a>,
    /// Breadcrumb trail.
    breadcrumbs: &'a [Crumb],
    /// Table of contents entries.
    toc: &'a [TocEntry],
    /// Rendered HTML content.
    content: &'a str,
}

/// Page metadata.
#[derive(Serialize)]
struct PageMeta<'a> {
    /// Page title (from the H1 heading).
    title: &'a str,
    /// Requested URL path.
    path: &'a str,
    /// `false` when the not-found page was returned.
    found: bool,
}

/// Handle GET /api/pages/ (home page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    page_response(&state, "/", &headers)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    page_response(&state, &to_site_path(&path), &headers)
}

fn page_response(state: &AppState, path: &str, headers: &HeaderMap) -> Response {
    let view = state.site.resolve(path);
    let page = view.page;

    let body = PageResponse {
        meta: PageMeta {
            title: &page.title,
            path,
            found: view.found,
        },
        breadcrumbs: &page.breadcrumbs,
        toc: &page.toc,
        content: &page.html,
    };

    if !view.found {
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }

    let etag = compute_etag(&state.version, path, &page.html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(body),
    )
        .into_response()
}

/// Compute `ETag` from version, requested path and content.
///
/// The path is part of the body (`meta.path`), so aliases of one page get
/// distinct tags. MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, path: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{path}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
