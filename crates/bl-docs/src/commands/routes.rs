//! `bl-docs routes` command implementation.

use std::path::PathBuf;

use bl_site::{Site, Taxonomy};
use clap::Args;

use crate::commands::load_site;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover bl-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sidebar taxonomy: "sidebar" or "routes" (overrides config).
    #[arg(long)]
    taxonomy: Option<Taxonomy>,
}

impl RoutesArgs {
    /// Execute the routes command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = load_site(self.config.as_deref(), self.taxonomy)?;

        output.heading(&format!(
            "Taxonomy: {} (active match: {})",
            site.taxonomy(),
            site.policy().as_str()
        ));

        output.heading("\nRoutes");
        for (path, title) in route_rows(&site) {
            output.line(&format!("  {path:<30} {title}"));
        }
        let fallback = &site.pages()[site.routes().fallback().index()];
        output.line(&format!("  {:<30} {} (fallback)", "*", fallback.title));

        output.heading("\nNavigation");
        let mut unreachable = 0;
        for section in navigation_rows(&site) {
            output.line(&format!("  {}", section.title));
            for link in section.links {
                let marker = if link.routed {
                    output.reachable()
                } else {
                    unreachable += 1;
                    output.unreachable()
                };
                output.line(&format!("    {marker} {:<26} {}", link.label, link.href));
            }
        }

        if unreachable > 0 {
            output.warning(&format!(
                "{unreachable} navigation link(s) show the not-found page"
            ));
        }

        Ok(())
    }
}

/// Registered paths with the title of their page.
fn route_rows(site: &Site) -> Vec<(&str, &str)> {
    site.routes()
        .paths()
        .map(|path| (path, site.resolve(path).page.title.as_str()))
        .collect()
}

struct SectionRow<'a> {
    title: &'a str,
    links: Vec<LinkRow<'a>>,
}

struct LinkRow<'a> {
    label: &'a str,
    href: &'a str,
    routed: bool,
}

/// Navigation sections with the reachability of each link.
fn navigation_rows(site: &Site) -> Vec<SectionRow<'_>> {
    site.navigation()
        .sections()
        .iter()
        .map(|section| SectionRow {
            title: section.title(),
            links: section
                .items()
                .iter()
                .map(|link| LinkRow {
                    label: &link.label,
                    href: &link.href,
                    routed: site.routes().contains(&link.href),
                })
                .collect(),
        })
        .collect()
}
