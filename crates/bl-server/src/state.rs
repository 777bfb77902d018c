//! Application state.
//!
//! Shared state for all request handlers.

use bl_site::Site;

/// Application state shared across all handlers.
///
/// The site is read-only after start-up, so handlers share it without locks.
pub struct AppState {
    /// Pre-rendered documentation site.
    pub site: Site,
    /// Application version for `ETag` invalidation.
    pub version: String,
}
