//! Frontend assets for the BESTLIB documentation site.
//!
//! The site ships one stylesheet and one client script. They are read from
//! the crate's `static/` directory at runtime, or compiled into the binary
//! when the `embed` feature is on.

use std::borrow::Cow;
use std::path::{Component, Path};

#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "static"]
struct Assets;

#[cfg(not(feature = "embed"))]
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// A frontend asset.
#[derive(Clone, Debug)]
pub struct Asset {
    /// File contents.
    pub data: Cow<'static, [u8]>,
    /// MIME type guessed from the file extension.
    pub mime: String,
}

/// Look up an asset by path relative to the asset root.
///
/// Only plain relative paths are served: absolute paths, `..` and `.`
/// segments, drive prefixes and empty segments are rejected.
pub fn get(path: &str) -> Option<Asset> {
    if !is_plain_relative(path) {
        return None;
    }
    read(path).map(|data| Asset {
        data,
        mime: mime_for(path),
    })
}

#[cfg(feature = "embed")]
fn read(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

#[cfg(not(feature = "embed"))]
fn read(path: &str) -> Option<Cow<'static, [u8]>> {
    std::fs::read(Path::new(STATIC_DIR).join(path))
        .ok()
        .map(Cow::Owned)
}

/// Whether `path` consists of named components only.
fn is_plain_relative(path: &str) -> bool {
    !path.is_empty()
        && path.split('/').all(|segment| !segment.is_empty())
        && Path::new(path)
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
}

/// MIME type for `path`, `application/octet-stream` when unknown.
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("app.css"), "text/css");
        assert_eq!(mime_for("app.js"), "text/javascript");
        assert_eq!(mime_for("logo.svg"), "image/svg+xml");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }

    #[test]
    fn test_site_assets_present() {
        assert!(get("app.css").is_some());

        let script = get("app.js").unwrap();
        assert_eq!(script.mime, "text/javascript");
        assert!(!script.data.is_empty());
    }

    #[test]
    fn test_missing_asset() {
        assert!(get("nonexistent_file_that_does_not_exist.txt").is_none());
    }

    #[test]
    fn test_parent_segments_rejected() {
        assert!(get("../Cargo.toml").is_none());
        assert!(get("x/../../Cargo.toml").is_none());
    }

    #[test]
    fn test_absolute_and_odd_paths_rejected() {
        for path in [
            "/etc/hostname",
            "/etc/passwd",
            "//etc/passwd",
            "./app.js",
            "x//app.js",
            "",
            "C:\\Windows\\win.ini",
        ] {
            assert!(get(path).is_none(), "{path:?} should be rejected");
        }
    }
}
