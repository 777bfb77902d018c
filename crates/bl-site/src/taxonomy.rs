//! The two sidebar taxonomies of the BESTLIB site.
//!
//! The sidebar and the route registrations historically disagreed on labels
//! and groupings. Both are kept as separate snapshots; one is chosen by
//! configuration and they are never merged.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::navigation::{NavLink, NavigationTree};

/// Which sidebar snapshot to use.
///
/// Deserializes from the same lowercase names [`FromStr`] accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    /// Sidebar as displayed by the site.
    #[default]
    Sidebar,
    /// Grouping implied by the route registrations and breadcrumbs.
    Routes,
}

impl Taxonomy {
    /// Name used in configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::Routes => "routes",
        }
    }

    /// Build the navigation tree for this taxonomy.
    pub fn navigation(self) -> NavigationTree {
        match self {
            Self::Sidebar => sidebar(),
            Self::Routes => routes(),
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown taxonomy name.
#[derive(Debug, thiserror::Error)]
#[error("unknown taxonomy {0:?}, expected \"sidebar\" or \"routes\"")]
pub struct ParseTaxonomyError(String);

impl FromStr for Taxonomy {
    type Err = ParseTaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sidebar" => Ok(Self::Sidebar),
            "routes" => Ok(Self::Routes),
            other => Err(ParseTaxonomyError(other.to_owned())),
        }
    }
}

fn getting_started() -> [NavLink; 2] {
    [
        NavLink::new("Quick Start", "/quick-start"),
        NavLink::new("Core Concepts", "/core-concepts"),
    ]
}

fn layouts() -> [NavLink; 2] {
    [
        NavLink::new("ReactiveMatrixLayout", "/layouts/reactive"),
        NavLink::new("Reactive Linking", "/layouts/reactive-linking"),
    ]
}

fn sidebar() -> NavigationTree {
    NavigationTree::new()
        .section("Getting Started", getting_started())
        .section("Layouts", layouts())
        .section(
            "Charts",
            [
                NavLink::new("Index", "/charts/index"),
                NavLink::new("Scatter Plot", "/charts/scatter"),
                NavLink::new("Histogram", "/charts/histogram"),
                NavLink::new("Bar Chart", "/charts/bar"),
                NavLink::new("Boxplot", "/charts/boxplot"),
            ],
        )
        .section(
            "Examples",
            [
                NavLink::new("Interactive Scatter", "/examples/scatter"),
                NavLink::new("Linked Charts", "/examples/linked"),
            ],
        )
        .section(
            "API Reference",
            [
                NavLink::new("APIs", "/api/python"),
                NavLink::new("Data Models", "/api/models"),
            ],
        )
}

fn routes() -> NavigationTree {
    let [quick_start, core_concepts] = getting_started();
    NavigationTree::new()
        .section(
            "Getting Started",
            [
                quick_start,
                core_concepts,
                NavLink::new("Deployment", "/deployment"),
            ],
        )
        .section("Layouts", layouts())
        .section(
            "Tutorials",
            [NavLink::new("Reactive Linking", "/tutorials/reactive-linking")],
        )
        .section("Charts", [NavLink::new("Index", "/charts/index")])
        .section(
            "Examples",
            [
                NavLink::new("Interactive Scatter", "/examples/scatter"),
                NavLink::new("Linked Views", "/examples/linked"),
            ],
        )
        .section(
            "API Reference",
            [
                NavLink::new("Python API", "/api/python"),
                NavLink::new("JavaScript API", "/api/javascript"),
                NavLink::new("Data Models", "/api/models"),
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn titles(tree: &NavigationTree) -> Vec<&str> {
        tree.sections().iter().map(|s| s.title()).collect()
    }

    #[test]
    fn test_sidebar_sections() {
        let tree = Taxonomy::Sidebar.navigation();
        assert_eq!(
            titles(&tree),
            ["Getting Started", "Layouts", "Charts", "Examples", "API Reference"]
        );
        assert_eq!(tree.links().count(), 13);
    }

    #[test]
    fn test_routes_sections() {
        let tree = Taxonomy::Routes.navigation();
        assert_eq!(
            titles(&tree),
            [
                "Getting Started",
                "Layouts",
                "Tutorials",
                "Charts",
                "Examples",
                "API Reference"
            ]
        );
        let linked = tree
            .links()
            .find(|l| l.href == "/examples/linked")
            .unwrap();
        assert_eq!(linked.label, "Linked Views");
    }

    #[test]
    fn test_every_link_has_a_page() {
        let catalog = Catalog::builtin();
        for taxonomy in [Taxonomy::Sidebar, Taxonomy::Routes] {
            for link in taxonomy.navigation().links() {
                assert!(
                    catalog.find(&link.href).is_some(),
                    "{taxonomy}: {} has no page",
                    link.href
                );
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sidebar".parse::<Taxonomy>().unwrap(), Taxonomy::Sidebar);
        assert_eq!("routes".parse::<Taxonomy>().unwrap(), Taxonomy::Routes);
        assert!("Sidebar".parse::<Taxonomy>().is_err());
    }

    #[test]
    fn test_deserialize_accepts_display_names() {
        for taxonomy in [Taxonomy::Sidebar, Taxonomy::Routes] {
            let json = format!("\"{taxonomy}\"");
            assert_eq!(serde_json::from_str::<Taxonomy>(&json).unwrap(), taxonomy);
        }
        assert!(serde_json::from_str::<Taxonomy>("\"Sidebar\"").is_err());
    }
}
