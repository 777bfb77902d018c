//! Static file serving.
//!
//! Serves the stylesheet and client script from `bl-assets` under `/assets/`.

use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;

/// Handle GET /assets/{path}.
pub(crate) async fn serve_asset(Path(path): Path<String>) -> Result<Response, ServerError> {
    let asset = bl_assets::get(&path).ok_or(ServerError::AssetNotFound(path))?;

    Ok((
        [
            (header::CONTENT_TYPE, asset.mime),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        asset.data.into_owned(),
    )
        .into_response())
}
