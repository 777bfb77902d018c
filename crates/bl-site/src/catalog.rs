//! Built-in page content.
//!
//! Every page is a markdown document compiled into the binary together with
//! its breadcrumb trail. The catalog also owns the "Page not found" page that
//! the route table falls back to.

use std::collections::HashMap;

use serde::Serialize;

/// Opaque page identifier within a [`Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageId(usize);

impl PageId {
    /// Position of the page in its catalog.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One breadcrumb. A crumb without `href` is the current page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Display label.
    pub label: String,
    /// Link target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Crumb {
    /// A crumb linking to `href`.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// The trailing crumb for the current page.
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Source of one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSource {
    /// Path the page is served at.
    pub path: String,
    /// Trail shown above the content.
    pub breadcrumbs: Vec<Crumb>,
    /// Markdown text.
    pub markdown: String,
}

impl PageSource {
    /// Create a page without breadcrumbs.
    pub fn new(path: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            breadcrumbs: Vec::new(),
            markdown: markdown.into(),
        }
    }

    /// Set the breadcrumb trail.
    #[must_use]
    pub fn with_breadcrumbs(mut self, crumbs: &[Crumb]) -> Self {
        self.breadcrumbs = crumbs.to_vec();
        self
    }
}

/// Immutable set of pages plus the not-found page.
#[derive(Clone, Debug)]
pub struct Catalog {
    pages: Vec<PageSource>,
    by_path: HashMap<String, PageId>,
    not_found: PageId,
}

impl Catalog {
    /// Build a catalog from `pages` and the page shown for unknown paths.
    ///
    /// The not-found page is never found by path. If two pages share a path
    /// the first one wins.
    pub fn new(pages: Vec<PageSource>, not_found: PageSource) -> Self {
        let mut by_path = HashMap::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            if by_path.contains_key(&page.path) {
                tracing::warn!(path = %page.path, "Duplicate page path ignored");
                continue;
            }
            by_path.insert(page.path.clone(), PageId(i));
        }

        let not_found_id = PageId(pages.len());
        let mut pages = pages;
        pages.push(not_found);

        Self {
            pages,
            by_path,
            not_found: not_found_id,
        }
    }

    /// The BESTLIB documentation pages.
    pub fn builtin() -> Self {
        let pages = vec![
            PageSource::new("/", include_str!("../content/home.md")),
            PageSource::new("/quick-start", include_str!("../content/quick-start.md"))
                .with_breadcrumbs(&[
                    Crumb::link("Getting Started", "/getting-started"),
                    Crumb::current("Quick Start"),
                ]),
            PageSource::new("/core-concepts", include_str!("../content/core-concepts.md"))
                .with_breadcrumbs(&[
                    Crumb::link("Getting Started", "/getting-started"),
                    Crumb::current("Core Concepts"),
                ]),
            PageSource::new("/deployment", include_str!("../content/deployment.md"))
                .with_breadcrumbs(&[Crumb::current("Deployment")]),
            PageSource::new(
                "/layouts/reactive",
                include_str!("../content/layouts/reactive.md"),
            )
            .with_breadcrumbs(&[
                Crumb::link("Layouts", "/layouts"),
                Crumb::current("ReactiveMatrixLayout"),
            ]),
            PageSource::new(
                "/layouts/reactive-linking",
                include_str!("../content/layouts/reactive-linking.md"),
            )
            .with_breadcrumbs(&[
                Crumb::link("Layouts", "/layouts"),
                Crumb::current("Reactive Linking"),
            ]),
            PageSource::new(
                "/tutorials/reactive-linking",
                include_str!("../content/tutorials/reactive-linking.md"),
            )
            .with_breadcrumbs(&[
                Crumb::link("Tutorials", "/tutorials"),
                Crumb::current("Reactive Linking"),
            ]),
            PageSource::new("/charts/index", include_str!("../content/charts/index.md"))
                .with_breadcrumbs(&[Crumb::current("Charts")]),
            chart("/charts/scatter", "Scatter Plot", include_str!("../content/charts/scatter.md")),
            chart(
                "/charts/histogram",
                "Histogram",
                include_str!("../content/charts/histogram.md"),
            ),
            chart("/charts/bar", "Bar Chart", include_str!("../content/charts/bar.md")),
            chart("/charts/boxplot", "Boxplot", include_str!("../content/charts/boxplot.md")),
            PageSource::new("/examples/scatter", include_str!("../content/examples/scatter.md"))
                .with_breadcrumbs(&[
                    Crumb::link("Examples", "/examples"),
                    Crumb::current("Interactive Scatter"),
                ]),
            PageSource::new("/examples/linked", include_str!("../content/examples/linked.md"))
                .with_breadcrumbs(&[
                    Crumb::link("Examples", "/examples"),
                    Crumb::current("Linked Views"),
                ]),
            PageSource::new("/api/python", include_str!("../content/api/python.md"))
                .with_breadcrumbs(&[
                    Crumb::link("API Reference", "/api"),
                    Crumb::current("Python API"),
                ]),
            PageSource::new("/api/javascript", include_str!("../content/api/javascript.md"))
                .with_breadcrumbs(&[
                    Crumb::link("API Reference", "/api"),
                    Crumb::current("JavaScript API"),
                ]),
            PageSource::new("/api/models", include_str!("../content/api/models.md"))
                .with_breadcrumbs(&[Crumb::link("API", "/api"), Crumb::current("Data Models")]),
        ];

        Self::new(
            pages,
            PageSource::new("/404", include_str!("../content/not-found.md")),
        )
    }

    /// Page served at exactly `path`.
    pub fn find(&self, path: &str) -> Option<PageId> {
        self.by_path.get(path).copied()
    }

    /// Page by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different catalog with more pages.
    pub fn get(&self, id: PageId) -> &PageSource {
        &self.pages[id.0]
    }

    /// Id of the not-found page.
    pub fn not_found(&self) -> PageId {
        self.not_found
    }

    /// All pages except the not-found page, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (PageId, &PageSource)> {
        self.pages
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.not_found.0)
            .map(|(i, page)| (PageId(i), page))
    }

    /// All pages including the not-found page, which comes last.
    pub fn all(&self) -> impl Iterator<Item = (PageId, &PageSource)> {
        self.pages.iter().enumerate().map(|(i, page)| (PageId(i), page))
    }

    /// Number of pages including the not-found page.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`: the not-found page is always present.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

fn chart(path: &str, label: &str, markdown: &str) -> PageSource {
    PageSource::new(path, markdown)
        .with_breadcrumbs(&[Crumb::link("Charts", "/charts/index"), Crumb::current(label)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_paths() {
        let catalog = Catalog::builtin();
        let paths: Vec<_> = catalog.iter().map(|(_, p)| p.path.as_str()).collect();

        assert_eq!(
            paths,
            [
                "/",
                "/quick-start",
                "/core-concepts",
                "/deployment",
                "/layouts/reactive",
                "/layouts/reactive-linking",
                "/tutorials/reactive-linking",
                "/charts/index",
                "/charts/scatter",
                "/charts/histogram",
                "/charts/bar",
                "/charts/boxplot",
                "/examples/scatter",
                "/examples/linked",
                "/api/python",
                "/api/javascript",
                "/api/models",
            ]
        );
        assert_eq!(catalog.len(), 18);
    }

    #[test]
    fn test_not_found_is_not_addressable() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("/404"), None);
        assert!(catalog.get(catalog.not_found()).markdown.starts_with("# Page not found"));
        assert!(catalog.iter().all(|(id, _)| id != catalog.not_found()));
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.find("/charts/scatter").is_some());
        assert_eq!(catalog.find("/charts/scatter/"), None);
        assert_eq!(catalog.find("/charts"), None);
    }

    #[test]
    fn test_every_page_has_a_title() {
        let catalog = Catalog::builtin();
        for (_, page) in catalog.iter() {
            assert!(page.markdown.starts_with("# "), "{} has no H1", page.path);
        }
    }

    #[test]
    fn test_chart_breadcrumbs() {
        let catalog = Catalog::builtin();
        let page = catalog.get(catalog.find("/charts/boxplot").unwrap());
        assert_eq!(
            page.breadcrumbs,
            [Crumb::link("Charts", "/charts/index"), Crumb::current("Boxplot")]
        );
    }

    #[test]
    fn test_duplicate_path_keeps_first() {
        let catalog = Catalog::new(
            vec![PageSource::new("/a", "# First"), PageSource::new("/a", "# Second")],
            PageSource::new("/404", "# Missing"),
        );
        let id = catalog.find("/a").unwrap();
        assert_eq!(catalog.get(id).markdown, "# First");
    }

    #[test]
    fn test_crumb_serialization() {
        let json = serde_json::to_value([Crumb::link("Charts", "/charts/index"), Crumb::current("Bar")])
            .unwrap();
        assert_eq!(json[0]["href"], "/charts/index");
        assert!(json[1].get("href").is_none());
    }
}
