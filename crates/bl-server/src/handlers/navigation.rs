//! Navigation API endpoint.
//!
//! Returns the sidebar display state for a current path.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use bl_site::{HOME_PATH, SectionView};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Query for GET /api/navigation.
#[derive(Deserialize)]
pub(crate) struct NavigationQuery {
    /// Current path; defaults to the home page.
    path: Option<String>,
}

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Taxonomy in use.
    taxonomy: &'static str,
    /// Path comparison rule used for active links.
    active_match: &'static str,
    /// Sections with active and expansion state.
    sections: Vec<SectionView>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let path = query.path.as_deref().unwrap_or(HOME_PATH);
    let view = state.site.navigation_view(path);

    Json(NavigationResponse {
        taxonomy: state.site.taxonomy().as_str(),
        active_match: state.site.policy().as_str(),
        sections: view.sections,
    })
}
