//! Chrome shell: header, sidebar, main area and footer.
//!
//! The shell has no state of its own. Everything outside `<main>` is a
//! function of the site identity and the navigation view, so two pages differ
//! only in their main area, their title and the active-link markers.

use std::fmt::Write;

use bl_renderer::escape_html;

use crate::catalog::Crumb;
use crate::navigation::{MatchPolicy, NavLink, NavigationView};

/// Identity of the documented project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    /// Brand shown in the header and footer.
    pub title: String,
    /// Documentation version.
    pub version: String,
    /// Source repository linked from header and footer.
    pub repository_url: String,
    /// Year in the copyright line.
    pub copyright_year: u16,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "BESTLIB".to_owned(),
            version: "1.0.0".to_owned(),
            repository_url: "https://github.com/NahiaEscalante/bestlib".to_owned(),
            copyright_year: 2025,
        }
    }
}

/// Page-independent chrome.
#[derive(Clone, Debug)]
pub struct Shell {
    info: SiteInfo,
    header_links: Vec<NavLink>,
    footer_links: Vec<NavLink>,
}

impl Shell {
    /// Chrome for `info` with the standard header and footer links.
    pub fn new(info: SiteInfo) -> Self {
        Self {
            info,
            header_links: vec![
                NavLink::new("Plot Types", "/plot-types"),
                NavLink::new("User Guide", "/user-guide"),
                NavLink::new("Tutorials", "/tutorials"),
                NavLink::new("Examples", "/examples"),
                NavLink::new("API Reference", "/api"),
                NavLink::new("Contribute", "/contribute"),
                NavLink::new("Releases", "/releases"),
            ],
            footer_links: vec![
                NavLink::new("MIT License", "/license"),
                NavLink::new("About", "/about"),
            ],
        }
    }

    /// Top-level header links.
    pub fn header_links(&self) -> &[NavLink] {
        &self.header_links
    }

    /// Footer copyright line.
    pub fn footer_text(&self) -> String {
        format!(
            "© {} {} Documentation v{}",
            self.info.copyright_year, self.info.title, self.info.version
        )
    }

    /// Browser title for a page.
    pub fn document_title(&self, page_title: &str) -> String {
        format!("{page_title} | {} Documentation", self.info.title)
    }

    /// Render a complete HTML document.
    ///
    /// `main_html` is the output of [`render_main`].
    pub fn render_document(
        &self,
        page_title: &str,
        navigation: &NavigationView,
        policy: MatchPolicy,
        main_html: &str,
    ) -> String {
        let mut out = String::with_capacity(main_html.len() + 4096);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        writeln!(
            out,
            "<title>{}</title>",
            escape_html(&self.document_title(page_title))
        )
        .unwrap();
        out.push_str("<link rel=\"stylesheet\" href=\"/assets/app.css\">\n");
        out.push_str("<script src=\"/assets/app.js\" defer></script>\n");
        out.push_str("</head>\n<body>\n");

        self.render_header(&mut out);
        out.push_str("<div class=\"layout\">\n");
        render_sidebar(navigation, policy, &mut out);
        out.push_str("<main id=\"page\" class=\"page\">\n");
        out.push_str(main_html);
        out.push_str("</main>\n</div>\n");
        self.render_footer(&mut out);

        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_header(&self, out: &mut String) {
        out.push_str("<header class=\"site-header\">\n");
        writeln!(
            out,
            r#"<a class="brand" href="/" data-nav>{}</a>"#,
            escape_html(&self.info.title)
        )
        .unwrap();
        out.push_str("<nav class=\"top-nav\" aria-label=\"Main\">\n");
        for link in &self.header_links {
            writeln!(
                out,
                r#"<a href="{}" data-nav>{}</a>"#,
                escape_html(&link.href),
                escape_html(&link.label)
            )
            .unwrap();
        }
        out.push_str("</nav>\n");
        writeln!(
            out,
            r#"<a class="github" href="{}" target="_blank" rel="noopener noreferrer">GitHub</a>"#,
            escape_html(&self.info.repository_url)
        )
        .unwrap();
        out.push_str("</header>\n");
    }

    fn render_footer(&self, out: &mut String) {
        out.push_str("<footer class=\"site-footer\">\n");
        writeln!(
            out,
            r#"<div class="copyright">{}</div>"#,
            escape_html(&self.footer_text())
        )
        .unwrap();
        out.push_str("<nav class=\"footer-links\" aria-label=\"Footer\">\n");
        for link in &self.footer_links {
            writeln!(
                out,
                r#"<a href="{}" data-nav>{}</a>"#,
                escape_html(&link.href),
                escape_html(&link.label)
            )
            .unwrap();
        }
        writeln!(
            out,
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">GitHub</a>"#,
            escape_html(&self.info.repository_url)
        )
        .unwrap();
        out.push_str("</nav>\n</footer>\n");
    }
}

/// Sidebar markup. Each section is a `<details>` element, open when expanded.
fn render_sidebar(navigation: &NavigationView, policy: MatchPolicy, out: &mut String) {
    writeln!(
        out,
        r#"<aside class="sidebar" data-active-match="{}">"#,
        policy.as_str()
    )
    .unwrap();
    out.push_str("<nav aria-label=\"Documentation\">\n");
    for section in &navigation.sections {
        writeln!(
            out,
            r#"<details class="nav-section" data-section="{}"{}>"#,
            section.id.index(),
            if section.expanded { " open" } else { "" }
        )
        .unwrap();
        writeln!(out, "<summary>{}</summary>", escape_html(&section.title)).unwrap();
        out.push_str("<ul>\n");
        for link in &section.links {
            let active = if link.active {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            writeln!(
                out,
                r#"<li><a href="{}" data-nav{active}>{}</a></li>"#,
                escape_html(&link.href),
                escape_html(&link.label)
            )
            .unwrap();
        }
        out.push_str("</ul>\n</details>\n");
    }
    out.push_str("</nav>\n</aside>\n");
}

/// Main area content: breadcrumb trail followed by the page body.
pub fn render_main(breadcrumbs: &[Crumb], content_html: &str) -> String {
    let mut out = String::with_capacity(content_html.len() + 256);
    render_breadcrumbs(breadcrumbs, &mut out);
    out.push_str("<article class=\"content\">\n");
    out.push_str(content_html);
    out.push_str("</article>\n");
    out
}

fn render_breadcrumbs(breadcrumbs: &[Crumb], out: &mut String) {
    if breadcrumbs.is_empty() {
        return;
    }
    out.push_str("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\">\n<ol>\n");
    for crumb in breadcrumbs {
        match &crumb.href {
            Some(href) => writeln!(
                out,
                r#"<li><a href="{}" data-nav>{}</a></li>"#,
                escape_html(href),
                escape_html(&crumb.label)
            )
            .unwrap(),
            None => writeln!(
                out,
                r#"<li aria-current="page">{}</li>"#,
                escape_html(&crumb.label)
            )
            .unwrap(),
        }
    }
    out.push_str("</ol>\n</nav>\n");
}
