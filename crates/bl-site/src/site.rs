//! Assembled documentation site.
//!
//! [`Site`] is built once at start-up: every page is rendered up front, the
//! route table is derived from the chosen taxonomy, and afterwards the site is
//! read-only and shared between request handlers.
//!
//! # Example
//!
//! ```
//! use bl_site::{Catalog, Site, SiteOptions};
//!
//! let site = Site::new(Catalog::builtin(), SiteOptions::default())?;
//!
//! let view = site.resolve("/charts/scatter");
//! assert!(view.found);
//! assert_eq!(view.page.title, "Scatter Plot");
//!
//! let missing = site.resolve("/charts/radviz");
//! assert!(!missing.found);
//! assert_eq!(missing.page.title, "Page not found");
//! # Ok::<(), bl_site::SiteError>(())
//! ```

use std::time::Duration;

use bl_renderer::{CodeSample, CopyFeedback, DEFAULT_LANGUAGE, MarkdownRenderer, TocEntry};

use crate::catalog::{Catalog, Crumb};
use crate::navigation::{MatchPolicy, NavigationTree, NavigationView, SectionExpansion};
use crate::routes::{RouteError, RouteTable};
use crate::shell::{Shell, SiteInfo, render_main};
use crate::taxonomy::Taxonomy;

/// Endpoint serving sample downloads.
pub const SAMPLES_ENDPOINT: &str = "/api/samples";

/// Site construction error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The route table could not be built.
    #[error("Invalid route table: {0}")]
    Route(#[from] RouteError),
}

/// Options for [`Site::new`].
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// Navigation snapshot.
    pub taxonomy: Taxonomy,
    /// Path comparison rule for routing and highlighting.
    pub policy: MatchPolicy,
    /// Header and footer identity.
    pub info: SiteInfo,
    /// Language for code fences without an info string.
    pub default_language: String,
    /// Duration of the "Copied" acknowledgment.
    pub copied_feedback: Duration,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            taxonomy: Taxonomy::default(),
            policy: MatchPolicy::default(),
            info: SiteInfo::default(),
            default_language: DEFAULT_LANGUAGE.to_owned(),
            copied_feedback: CopyFeedback::DEFAULT_DURATION,
        }
    }
}

/// A page after markdown rendering.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// Catalog path.
    pub path: String,
    /// First H1 heading, or the path when the page has none.
    pub title: String,
    /// Breadcrumb trail.
    pub breadcrumbs: Vec<Crumb>,
    /// Page body HTML.
    pub html: String,
    /// Headings below the title.
    pub toc: Vec<TocEntry>,
    /// Code samples in document order.
    pub samples: Vec<CodeSample>,
}

/// Page selected for a path.
#[derive(Clone, Copy, Debug)]
pub struct PageView<'a> {
    /// Page to display.
    pub page: &'a RenderedPage,
    /// `false` when the not-found page was selected.
    pub found: bool,
}

/// Complete HTML response for a path.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    /// `false` when the not-found page was rendered.
    pub found: bool,
    /// Full HTML document.
    pub html: String,
}

/// Read-only documentation site.
#[derive(Debug)]
pub struct Site {
    navigation: NavigationTree,
    routes: RouteTable,
    shell: Shell,
    pages: Vec<RenderedPage>,
    taxonomy: Taxonomy,
    copied_feedback: Duration,
}

impl Site {
    /// Render every page of `catalog` and derive the route table.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Route`] if the chosen navigation contains a link
    /// target that is not an absolute path.
    pub fn new(catalog: Catalog, options: SiteOptions) -> Result<Self, SiteError> {
        let navigation = options.taxonomy.navigation();
        let routes = RouteTable::for_navigation(&navigation, &catalog, options.policy)?;

        let renderer = MarkdownRenderer::new()
            .with_default_language(options.default_language)
            .with_copied_feedback(options.copied_feedback)
            .with_samples_endpoint(SAMPLES_ENDPOINT);

        let pages: Vec<RenderedPage> = catalog
            .all()
            .map(|(_, source)| {
                let result = renderer.render(&source.path, &source.markdown);
                RenderedPage {
                    path: source.path.clone(),
                    title: result.title.unwrap_or_else(|| source.path.clone()),
                    breadcrumbs: source.breadcrumbs.clone(),
                    html: result.html,
                    toc: result.toc,
                    samples: result.samples,
                }
            })
            .collect();

        tracing::info!(
            taxonomy = %options.taxonomy,
            policy = options.policy.as_str(),
            pages = pages.len(),
            routes = routes.entries().len(),
            "Site ready"
        );

        Ok(Self {
            navigation,
            routes,
            shell: Shell::new(options.info),
            pages,
            taxonomy: options.taxonomy,
            copied_feedback: options.copied_feedback,
        })
    }

    /// Select the page for `path`. Unknown paths get the not-found page.
    pub fn resolve(&self, path: &str) -> PageView<'_> {
        let resolution = self.routes.resolve(path);
        PageView {
            page: &self.pages[resolution.page.index()],
            found: resolution.matched,
        }
    }

    /// Navigation display state for `current_path` with every section open.
    pub fn navigation_view(&self, current_path: &str) -> NavigationView {
        self.navigation_view_with(current_path, &self.default_expansion())
    }

    /// Navigation display state for `current_path` and an explicit expansion.
    pub fn navigation_view_with(
        &self,
        current_path: &str,
        expansion: &SectionExpansion,
    ) -> NavigationView {
        self.navigation
            .view(current_path, expansion, self.routes.policy())
    }

    /// Expansion state at first display: every section open.
    pub fn default_expansion(&self) -> SectionExpansion {
        SectionExpansion::all_expanded(&self.navigation)
    }

    /// Render the full HTML document for `path`.
    pub fn render_document(&self, path: &str) -> RenderedDocument {
        let view = self.resolve(path);
        let navigation = self.navigation_view(path);
        let main = render_main(&view.page.breadcrumbs, &view.page.html);
        RenderedDocument {
            found: view.found,
            html: self.shell.render_document(
                &view.page.title,
                &navigation,
                self.routes.policy(),
                &main,
            ),
        }
    }

    /// Sample `index` of the page routed at `page_path`.
    ///
    /// Paths that resolve to the not-found page have no samples.
    pub fn sample(&self, page_path: &str, index: usize) -> Option<&CodeSample> {
        let view = self.resolve(page_path);
        if !view.found {
            return None;
        }
        view.page.samples.get(index)
    }

    /// Navigation tree in use.
    pub fn navigation(&self) -> &NavigationTree {
        &self.navigation
    }

    /// Route table in use.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Navigation snapshot in use.
    pub fn taxonomy(&self) -> Taxonomy {
        self.taxonomy
    }

    /// Path comparison rule.
    pub fn policy(&self) -> MatchPolicy {
        self.routes.policy()
    }

    /// Duration of the "Copied" acknowledgment.
    pub fn copied_feedback(&self) -> Duration {
        self.copied_feedback
    }

    /// Rendered pages in catalog order, not-found page last.
    pub fn pages(&self) -> &[RenderedPage] {
        &self.pages
    }
}
