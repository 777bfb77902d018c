//! CLI command implementations.

pub(crate) mod routes;
pub(crate) mod sample;
pub(crate) mod serve;

use std::path::Path;

use bl_config::{CliSettings, Config};
use bl_server::site_options_from_config;
use bl_site::{Catalog, Site, Taxonomy};

use crate::error::CliError;

pub(crate) use routes::RoutesArgs;
pub(crate) use sample::SampleCommand;
pub(crate) use serve::ServeArgs;

/// Load configuration and assemble the site it describes.
pub(crate) fn load_site(
    config_path: Option<&Path>,
    taxonomy: Option<Taxonomy>,
) -> Result<Site, CliError> {
    let cli_settings = CliSettings {
        taxonomy,
        ..CliSettings::default()
    };
    let config = Config::load(config_path, Some(&cli_settings))?;
    Ok(Site::new(Catalog::builtin(), site_options_from_config(&config))?)
}
