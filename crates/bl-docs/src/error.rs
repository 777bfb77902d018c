//! CLI error types.

use bl_config::ConfigError;
use bl_renderer::ClipboardError;
use bl_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Clipboard(#[from] ClipboardError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("No sample {index} on page {page}")]
    SampleNotFound { page: String, index: usize },

    #[error("{0}")]
    Server(String),
}
