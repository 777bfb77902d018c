//! HTTP request handlers.

pub(crate) mod document;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod samples;

/// Convert a wildcard capture (without leading slash) to a site path.
pub(crate) fn to_site_path(path: &str) -> String {
    format!("/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_site_path() {
        assert_eq!(to_site_path(""), "/");
        assert_eq!(to_site_path("charts/bar"), "/charts/bar");
        assert_eq!(to_site_path("charts/bar/"), "/charts/bar/");
    }
}
