//! Code sample download endpoint.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Query for GET /api/samples.
#[derive(Deserialize)]
pub(crate) struct SampleQuery {
    /// Path of the page holding the sample.
    page: String,
    /// Position of the sample in the page.
    index: usize,
}

/// Handle GET /api/samples.
///
/// Answers with the literal sample text as an attachment.
pub(crate) async fn get_sample(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SampleQuery>, QueryRejection>,
) -> Result<Response, ServerError> {
    let Query(query) = query.map_err(|e| ServerError::InvalidQuery(e.body_text()))?;
    let sample = state
        .site
        .sample(&query.page, query.index)
        .ok_or(ServerError::SampleNotFound {
            page: query.page.clone(),
            index: query.index,
        })?;

    let artifact = sample.download();
    tracing::debug!(
        page = %query.page,
        index = query.index,
        filename = %artifact.filename,
        "Sample download"
    );

    Ok((
        [
            (
                header::CONTENT_TYPE,
                format!("{}; charset=utf-8", artifact.mime),
            ),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&artifact.filename),
            ),
        ],
        artifact.content,
    )
        .into_response())
}

/// `attachment` disposition with a quoted, header-safe filename.
fn content_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
