//! HTTP server for the BESTLIB documentation site.
//!
//! This crate serves the pre-rendered [`Site`] with axum:
//! - full HTML documents for every path (the not-found page for unknown ones)
//! - JSON page and navigation endpoints used by the client script
//! - code sample downloads
//! - the stylesheet and client script
//!
//! # Quick Start
//!
//! ```ignore
//! use bl_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (bl-server)
//!                        │
//!                        ├─► /api/pages, /api/navigation, /api/samples
//!                        │       │
//!                        │       └─► Site (routes + navigation + rendered pages)
//!                        │
//!                        ├─► /assets (bl-assets)
//!                        │
//!                        └─► any other path ──► Site::render_document
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use bl_site::{Catalog, Site, SiteInfo, SiteOptions};

pub use app::create_router;
pub use error::ServerError;
pub use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site assembly options.
    pub site: SiteOptions,
    /// Application version (for `ETag` invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            site: SiteOptions::default(),
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the site cannot be assembled or the address cannot
/// be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let site = Site::new(Catalog::builtin(), config.site)?;

    let state = Arc::new(AppState {
        site,
        version: config.version,
    });
    let app = create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C, shutting down");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Site options from BESTLIB configuration.
#[must_use]
pub fn site_options_from_config(config: &bl_config::Config) -> SiteOptions {
    SiteOptions {
        taxonomy: config.navigation.taxonomy,
        policy: config.navigation.active_match,
        info: SiteInfo {
            title: config.site.title.clone(),
            version: config.site.version.clone(),
            repository_url: config.site.repository_url.clone(),
            copyright_year: config.site.copyright_year,
        },
        default_language: config.code_samples.default_language.clone(),
        copied_feedback: Duration::from_millis(config.code_samples.copied_feedback_ms),
    }
}

/// Create server configuration from BESTLIB configuration.
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_bl_config(config: &bl_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        site: site_options_from_config(config),
        version,
    }
}
