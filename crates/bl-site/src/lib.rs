//! Site structure for the BESTLIB documentation.
//!
//! This crate provides:
//! - [`RouteTable`]: exact path to page mapping with a not-found fallback
//! - [`NavigationTree`]: collapsible sidebar sections and active-link detection
//! - [`Catalog`]: the page content compiled into the binary
//! - [`Shell`]: header, sidebar and footer around every page
//! - [`Site`]: all of the above assembled and pre-rendered
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bl_site::{Catalog, Site, SiteOptions, Taxonomy};
//!
//! let options = SiteOptions {
//!     taxonomy: Taxonomy::Routes,
//!     ..SiteOptions::default()
//! };
//! let site = Site::new(Catalog::builtin(), options)?;
//!
//! let doc = site.render_document("/deployment");
//! assert!(doc.found);
//! # Ok(())
//! # }
//! ```

mod catalog;
mod navigation;
mod routes;
mod shell;
mod site;
mod taxonomy;

pub use catalog::{Catalog, Crumb, PageId, PageSource};
pub use navigation::{
    LinkView, MatchPolicy, NavLink, NavSection, NavigationTree, NavigationView, SectionExpansion,
    SectionId, SectionView, is_active,
};
pub use routes::{HOME_PATH, Resolution, RouteEntry, RouteError, RouteTable, RouteTableBuilder};
pub use shell::{Shell, SiteInfo, render_main};
pub use site::{
    PageView, RenderedDocument, RenderedPage, SAMPLES_ENDPOINT, Site, SiteError, SiteOptions,
};
pub use taxonomy::{ParseTaxonomyError, Taxonomy};

// Re-exported so consumers need not depend on the renderer directly.
pub use bl_renderer::{CodeSample, DownloadArtifact, TocEntry};
