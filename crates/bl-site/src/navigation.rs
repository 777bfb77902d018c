//! Sidebar navigation tree.
//!
//! The tree itself is static: an ordered list of titled sections, each with an
//! ordered list of links. Which sections are open is tracked separately in a
//! [`SectionExpansion`] owned by whoever displays the tree, and the active link
//! is a pure function of the current path passed in by the caller.

use serde::{Deserialize, Serialize};

/// Opaque section identifier, assigned in definition order.
///
/// Titles are not required to be unique, so expansion state is keyed by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(usize);

impl SectionId {
    /// Position of the section in the tree.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Target path.
    pub href: String,
}

impl NavLink {
    /// Create a link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A titled, collapsible group of links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    id: SectionId,
    title: String,
    items: Vec<NavLink>,
}

impl NavSection {
    /// Section id.
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// Section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Links in display order.
    pub fn items(&self) -> &[NavLink] {
        &self.items
    }
}

/// How a link target is compared with the current path.
///
/// The router uses the same policy, so a highlighted link always routes to
/// the page being shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Plain string equality.
    #[default]
    Exact,
    /// Equality after dropping one trailing slash (the root `/` is kept).
    IgnoreTrailingSlash,
}

impl MatchPolicy {
    /// Canonical form of `path` under this policy.
    pub fn normalize(self, path: &str) -> &str {
        match self {
            Self::Exact => path,
            Self::IgnoreTrailingSlash => {
                if path.len() > 1 {
                    path.strip_suffix('/').unwrap_or(path)
                } else {
                    path
                }
            }
        }
    }

    /// Whether `href` designates `current_path`.
    pub fn matches(self, href: &str, current_path: &str) -> bool {
        self.normalize(href) == self.normalize(current_path)
    }

    /// Name used in markup and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::IgnoreTrailingSlash => "ignore-trailing-slash",
        }
    }
}

/// Whether the link `href` is the active link for `current_path`.
pub fn is_active(href: &str, current_path: &str, policy: MatchPolicy) -> bool {
    policy.matches(href, current_path)
}

/// Static section/link hierarchy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationTree {
    sections: Vec<NavSection>,
}

impl NavigationTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section. Ids follow insertion order.
    #[must_use]
    pub fn section(
        mut self,
        title: impl Into<String>,
        items: impl IntoIterator<Item = NavLink>,
    ) -> Self {
        let title = title.into();
        if self.section_by_title(&title).is_some() {
            tracing::warn!(title = %title, "Duplicate navigation section title");
        }
        let id = SectionId(self.sections.len());
        self.sections.push(NavSection {
            id,
            title,
            items: items.into_iter().collect(),
        });
        self
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// First section with the given title.
    pub fn section_by_title(&self, title: &str) -> Option<&NavSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// All links across all sections, in display order.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Compute the display state for `current_path`.
    ///
    /// Nothing is cached: every call re-derives the active flags.
    pub fn view(
        &self,
        current_path: &str,
        expansion: &SectionExpansion,
        policy: MatchPolicy,
    ) -> NavigationView {
        let sections = self
            .sections
            .iter()
            .map(|section| SectionView {
                id: section.id,
                title: section.title.clone(),
                expanded: expansion.is_expanded(section.id),
                links: section
                    .items
                    .iter()
                    .map(|link| LinkView {
                        label: link.label.clone(),
                        href: link.href.clone(),
                        active: is_active(&link.href, current_path, policy),
                    })
                    .collect(),
            })
            .collect();
        NavigationView { sections }
    }
}

/// Open/closed state of every section.
///
/// Starts with every section expanded and changes only through explicit
/// toggles. Not persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionExpansion {
    expanded: Vec<bool>,
}

impl SectionExpansion {
    /// All sections of `tree` expanded.
    pub fn all_expanded(tree: &NavigationTree) -> Self {
        Self {
            expanded: vec![true; tree.sections.len()],
        }
    }

    /// Whether the section is expanded. Unknown ids report collapsed.
    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded.get(id.0).copied().unwrap_or(false)
    }

    /// Flip one section and return its new state.
    pub fn toggle(&mut self, id: SectionId) -> Option<bool> {
        let slot = self.expanded.get_mut(id.0)?;
        *slot = !*slot;
        Some(*slot)
    }

    /// Flip the first section titled `title`.
    pub fn toggle_title(&mut self, tree: &NavigationTree, title: &str) -> Option<bool> {
        let id = tree.section_by_title(title)?.id;
        self.toggle(id)
    }
}

/// Display state of the navigation tree for one current path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationView {
    /// Sections in display order.
    pub sections: Vec<SectionView>,
}

impl NavigationView {
    /// The active links (normally zero or one).
    pub fn active_links(&self) -> impl Iterator<Item = &LinkView> {
        self.sections
            .iter()
            .flat_map(|s| s.links.iter())
            .filter(|l| l.active)
    }

    /// Section view by title.
    pub fn section(&self, title: &str) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.title == title)
    }
}

/// Display state of one section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// Section id.
    pub id: SectionId,
    /// Section title.
    pub title: String,
    /// Whether the links are shown.
    pub expanded: bool,
    /// All links of the section.
    pub links: Vec<LinkView>,
}

impl SectionView {
    /// Links that are visible: all of them when expanded, none otherwise.
    pub fn visible_links(&self) -> &[LinkView] {
        if self.expanded { &self.links[..] } else { &[] }
    }
}

/// Display state of one link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkView {
    /// Display label.
    pub label: String,
    /// Target path.
    pub href: String,
    /// Whether the link targets the current path.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scenario_tree() -> NavigationTree {
        NavigationTree::new()
            .section(
                "Getting Started",
                [
                    NavLink::new("Quick Start", "/quick-start"),
                    NavLink::new("Core Concepts", "/core-concepts"),
                ],
            )
            .section(
                "Charts",
                [
                    NavLink::new("Index", "/charts/index"),
                    NavLink::new("Scatter Plot", "/charts/scatter"),
                    NavLink::new("Histogram", "/charts/histogram"),
                    NavLink::new("Bar Chart", "/charts/bar"),
                ],
            )
    }

    #[test]
    fn test_ids_follow_definition_order() {
        let tree = scenario_tree();
        let ids: Vec<_> = tree.sections().iter().map(|s| s.id().index()).collect();
        assert_eq!(ids, [0, 1]);
        assert_eq!(tree.links().count(), 6);
    }

    #[test]
    fn test_all_sections_expanded_at_mount() {
        let tree = scenario_tree();
        let expansion = SectionExpansion::all_expanded(&tree);
        let view = tree.view("/", &expansion, MatchPolicy::Exact);

        assert_eq!(view.section("Getting Started").unwrap().visible_links().len(), 2);
        assert_eq!(view.section("Charts").unwrap().visible_links().len(), 4);
    }

    #[test]
    fn test_toggle_hides_only_that_section() {
        let tree = scenario_tree();
        let mut expansion = SectionExpansion::all_expanded(&tree);

        assert_eq!(expansion.toggle_title(&tree, "Charts"), Some(false));
        let view = tree.view("/", &expansion, MatchPolicy::Exact);

        let charts = view.section("Charts").unwrap();
        assert!(!charts.expanded);
        assert!(charts.visible_links().is_empty());
        assert_eq!(charts.links.len(), 4);
        assert_eq!(view.section("Getting Started").unwrap().visible_links().len(), 2);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let tree = scenario_tree();
        let mut expansion = SectionExpansion::all_expanded(&tree);
        let charts = tree.section_by_title("Charts").unwrap().id();
        let getting_started = tree.section_by_title("Getting Started").unwrap().id();

        expansion.toggle(getting_started);
        let before = expansion.clone();

        expansion.toggle(charts);
        expansion.toggle(charts);

        assert_eq!(expansion, before);
        assert!(!expansion.is_expanded(getting_started));
        assert!(expansion.is_expanded(charts));
    }

    #[test]
    fn test_toggle_unknown_section() {
        let tree = scenario_tree();
        let mut expansion = SectionExpansion::all_expanded(&tree);
        assert_eq!(expansion.toggle_title(&tree, "Tutorials"), None);
        assert_eq!(expansion.toggle(SectionId(9)), None);
        assert!(!expansion.is_expanded(SectionId(9)));
    }

    #[test]
    fn test_only_matching_link_is_active() {
        let tree = scenario_tree();
        let expansion = SectionExpansion::all_expanded(&tree);
        let view = tree.view("/charts/scatter", &expansion, MatchPolicy::Exact);

        let active: Vec<_> = view.active_links().map(|l| l.label.as_str()).collect();
        assert_eq!(active, ["Scatter Plot"]);
    }

    #[test]
    fn test_active_link_recomputed_per_path() {
        let tree = scenario_tree();
        let expansion = SectionExpansion::all_expanded(&tree);

        for link in tree.links() {
            let view = tree.view(&link.href, &expansion, MatchPolicy::Exact);
            for candidate in view.sections.iter().flat_map(|s| &s.links) {
                assert_eq!(candidate.active, candidate.href == link.href);
            }
        }
    }

    #[test]
    fn test_exact_policy_has_no_prefix_or_slash_matching() {
        assert!(is_active("/charts/scatter", "/charts/scatter", MatchPolicy::Exact));
        assert!(!is_active("/charts/scatter", "/charts/scatter/", MatchPolicy::Exact));
        assert!(!is_active("/charts", "/charts/scatter", MatchPolicy::Exact));
        assert!(!is_active("/Charts/Scatter", "/charts/scatter", MatchPolicy::Exact));
    }

    #[test]
    fn test_ignore_trailing_slash_policy() {
        let policy = MatchPolicy::IgnoreTrailingSlash;
        assert!(is_active("/charts/scatter", "/charts/scatter/", policy));
        assert!(is_active("/", "/", policy));
        assert!(!is_active("/charts", "/charts/scatter", policy));
        assert_eq!(policy.normalize("/"), "/");
    }

    #[test]
    fn test_policy_deserializes_from_markup_name() {
        for policy in [MatchPolicy::Exact, MatchPolicy::IgnoreTrailingSlash] {
            let json = format!("\"{}\"", policy.as_str());
            assert_eq!(serde_json::from_str::<MatchPolicy>(&json).unwrap(), policy);
        }
    }

    #[test]
    fn test_collapsed_section_still_reports_active_link() {
        let tree = scenario_tree();
        let mut expansion = SectionExpansion::all_expanded(&tree);
        expansion.toggle_title(&tree, "Charts");

        let view = tree.view("/charts/bar", &expansion, MatchPolicy::Exact);
        assert_eq!(view.active_links().count(), 1);
    }

    #[test]
    fn test_empty_section_is_valid() {
        let tree = NavigationTree::new().section("Releases", []);
        let expansion = SectionExpansion::all_expanded(&tree);
        let view = tree.view("/", &expansion, MatchPolicy::Exact);

        let releases = view.section("Releases").unwrap();
        assert!(releases.expanded);
        assert!(releases.links.is_empty());
    }

    #[test]
    fn test_duplicate_titles_get_distinct_ids() {
        let tree = NavigationTree::new()
            .section("Examples", [NavLink::new("A", "/a")])
            .section("Examples", [NavLink::new("B", "/b")]);
        let mut expansion = SectionExpansion::all_expanded(&tree);

        expansion.toggle(tree.sections()[1].id());

        assert!(expansion.is_expanded(tree.sections()[0].id()));
        assert!(!expansion.is_expanded(tree.sections()[1].id()));
    }

    #[test]
    fn test_view_serialization() {
        let tree = scenario_tree();
        let expansion = SectionExpansion::all_expanded(&tree);
        let json = serde_json::to_value(tree.view("/quick-start", &expansion, MatchPolicy::Exact))
            .unwrap();

        assert_eq!(json["sections"][0]["id"], 0);
        assert_eq!(json["sections"][0]["title"], "Getting Started");
        assert_eq!(json["sections"][0]["expanded"], true);
        assert_eq!(json["sections"][0]["links"][0]["active"], true);
        assert_eq!(json["sections"][1]["links"][0]["href"], "/charts/index");
    }
}
