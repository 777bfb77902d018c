//! Route table.
//!
//! Maps URL paths to page ids with a single fallback for everything else.
//! The table is built once at start-up and never changes afterwards.

use std::collections::HashMap;

use crate::catalog::{Catalog, PageId};
use crate::navigation::{MatchPolicy, NavigationTree};

/// Path of the home page.
pub const HOME_PATH: &str = "/";

/// Route table construction error.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Two entries for the same path.
    #[error("duplicate route: {0}")]
    DuplicatePath(String),
    /// Route path without a leading slash.
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),
}

/// One registered route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path as registered.
    pub path: String,
    /// Page rendered for the path.
    pub page: PageId,
}

/// Outcome of resolving a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Page to render.
    pub page: PageId,
    /// `false` when the fallback was chosen.
    pub matched: bool,
}

/// Immutable path → page mapping.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: HashMap<String, usize>,
    fallback: PageId,
    policy: MatchPolicy,
}

/// Builder for [`RouteTable`].
#[derive(Debug)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
    index: HashMap<String, usize>,
    policy: MatchPolicy,
}

impl RouteTableBuilder {
    /// Register `path` for `page`.
    ///
    /// # Errors
    ///
    /// Fails when the path lacks a leading slash or is already registered
    /// (after normalization under the table's policy).
    pub fn route(&mut self, path: &str, page: PageId) -> Result<&mut Self, RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPath(path.to_owned()));
        }
        let key = self.policy.normalize(path).to_owned();
        if self.index.contains_key(&key) {
            return Err(RouteError::DuplicatePath(path.to_owned()));
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(RouteEntry {
            path: path.to_owned(),
            page,
        });
        Ok(self)
    }

    /// Whether `path` is already registered.
    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(self.policy.normalize(path))
    }

    /// Finish the table with the page rendered for unmatched paths.
    pub fn build(self, fallback: PageId) -> RouteTable {
        RouteTable {
            entries: self.entries,
            index: self.index,
            fallback,
            policy: self.policy,
        }
    }
}

impl RouteTable {
    /// Start an empty table that compares paths with `policy`.
    pub fn builder(policy: MatchPolicy) -> RouteTableBuilder {
        RouteTableBuilder {
            entries: Vec::new(),
            index: HashMap::new(),
            policy,
        }
    }

    /// Build the table for a navigation tree.
    ///
    /// Registers the home page and every link target that has a page in the
    /// catalog. Link targets without a page stay unregistered and resolve to
    /// the catalog's not-found page.
    ///
    /// # Errors
    ///
    /// Fails if a link target is not an absolute path.
    pub fn for_navigation(
        tree: &NavigationTree,
        catalog: &Catalog,
        policy: MatchPolicy,
    ) -> Result<Self, RouteError> {
        let mut builder = Self::builder(policy);

        if let Some(home) = catalog.find(HOME_PATH) {
            builder.route(HOME_PATH, home)?;
        }

        for link in tree.links() {
            if builder.contains(&link.href) {
                tracing::debug!(href = %link.href, "Link target already routed");
                continue;
            }
            match catalog.find(&link.href) {
                Some(page) => {
                    builder.route(&link.href, page)?;
                }
                None => {
                    tracing::warn!(
                        href = %link.href,
                        label = %link.label,
                        "Navigation link has no page and will show the not-found page"
                    );
                }
            }
        }

        Ok(builder.build(catalog.not_found()))
    }

    /// Select the page for `path`.
    ///
    /// Unregistered paths get the fallback page; this is not an error.
    pub fn resolve(&self, path: &str) -> Resolution {
        match self.index.get(self.policy.normalize(path)) {
            Some(&i) => Resolution {
                page: self.entries[i].page,
                matched: true,
            },
            None => {
                tracing::debug!(path, "No route, using fallback");
                Resolution {
                    page: self.fallback,
                    matched: false,
                }
            }
        }
    }

    /// Whether `path` is registered.
    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(self.policy.normalize(path))
    }

    /// Registered routes in registration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Registered paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    /// Page used for unmatched paths.
    pub fn fallback(&self) -> PageId {
        self.fallback
    }

    /// Path comparison policy.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Crumb, PageSource};
    use crate::navigation::NavLink;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                PageSource::new("/", "# Home"),
                PageSource::new("/quick-start", "# Quick Start"),
                PageSource::new("/charts/scatter", "# Scatter Plot")
                    .with_breadcrumbs(&[Crumb::link("Charts", "/charts/index")]),
            ],
            PageSource::new("/404", "# Page not found"),
        )
    }

    fn tree() -> NavigationTree {
        NavigationTree::new()
            .section("Getting Started", [NavLink::new("Quick Start", "/quick-start")])
            .section(
                "Charts",
                [
                    NavLink::new("Scatter Plot", "/charts/scatter"),
                    NavLink::new("Radviz", "/charts/radviz"),
                ],
            )
    }

    #[test]
    fn test_registered_paths_resolve_to_their_page() {
        let catalog = catalog();
        let table = RouteTable::for_navigation(&tree(), &catalog, MatchPolicy::Exact).unwrap();

        for entry in table.entries() {
            let resolution = table.resolve(&entry.path);
            assert!(resolution.matched);
            assert_eq!(resolution.page, entry.page);
            assert_eq!(catalog.get(resolution.page).path, entry.path);
        }
    }

    #[test]
    fn test_unregistered_paths_resolve_to_fallback() {
        let catalog = catalog();
        let table = RouteTable::for_navigation(&tree(), &catalog, MatchPolicy::Exact).unwrap();

        for path in ["/nope", "/charts", "/quick-start/", "/QUICK-START", ""] {
            let resolution = table.resolve(path);
            assert!(!resolution.matched, "{path} should not match");
            assert_eq!(resolution.page, catalog.not_found());
        }
    }

    #[test]
    fn test_link_without_page_is_not_routed() {
        let catalog = catalog();
        let table = RouteTable::for_navigation(&tree(), &catalog, MatchPolicy::Exact).unwrap();

        assert!(!table.contains("/charts/radviz"));
        let paths: Vec<_> = table.paths().collect();
        assert_eq!(paths, ["/", "/quick-start", "/charts/scatter"]);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let catalog = catalog();
        let page = catalog.find("/quick-start").unwrap();
        let mut builder = RouteTable::builder(MatchPolicy::Exact);
        builder.route("/quick-start", page).unwrap();

        let err = builder.route("/quick-start", page).unwrap_err();
        assert!(matches!(err, RouteError::DuplicatePath(ref p) if p == "/quick-start"));
    }

    #[test]
    fn test_duplicate_after_normalization_rejected() {
        let catalog = catalog();
        let page = catalog.find("/quick-start").unwrap();
        let mut builder = RouteTable::builder(MatchPolicy::IgnoreTrailingSlash);
        builder.route("/quick-start", page).unwrap();

        assert!(builder.route("/quick-start/", page).is_err());
    }

    #[test]
    fn test_relative_path_rejected() {
        let catalog = catalog();
        let mut builder = RouteTable::builder(MatchPolicy::Exact);
        let err = builder.route("quick-start", catalog.not_found()).unwrap_err();
        assert!(matches!(err, RouteError::InvalidPath(_)));
    }

    #[test]
    fn test_trailing_slash_policy_applies_to_resolution() {
        let catalog = catalog();
        let table =
            RouteTable::for_navigation(&tree(), &catalog, MatchPolicy::IgnoreTrailingSlash)
                .unwrap();

        assert!(table.resolve("/quick-start/").matched);
        assert!(table.resolve("/").matched);
        assert!(!table.resolve("/quick").matched);
    }

    #[test]
    fn test_repeated_link_target_routed_once() {
        let catalog = catalog();
        let tree = NavigationTree::new()
            .section("A", [NavLink::new("Quick Start", "/quick-start")])
            .section("B", [NavLink::new("Start here", "/quick-start")]);

        let table = RouteTable::for_navigation(&tree, &catalog, MatchPolicy::Exact).unwrap();
        assert_eq!(table.entries().len(), 2);
    }
}
