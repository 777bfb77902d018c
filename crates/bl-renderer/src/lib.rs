//! Markdown rendering and code sample widgets for the BESTLIB documentation site.
//!
//! This crate turns page markdown into HTML fragments and extracts every fenced
//! code block as a [`CodeSample`]. Samples are rendered as a viewer widget with
//! copy and download controls; the same [`CodeSample`] value backs the download
//! endpoint and the terminal copy command.
//!
//! # Example
//!
//! ```
//! use bl_renderer::MarkdownRenderer;
//!
//! let markdown = "# Scatter Plot\n\n```python filename=scatter.py\nlayout.display()\n```";
//! let result = MarkdownRenderer::new().render("/charts/scatter", markdown);
//!
//! assert_eq!(result.title.as_deref(), Some("Scatter Plot"));
//! assert_eq!(result.samples[0].download().filename, "scatter.py");
//! ```

mod code_sample;
mod renderer;
mod util;

pub use code_sample::{
    COPIED_LABEL, COPY_LABEL, Clipboard, ClipboardError, CodeSample, CopyFeedback,
    DEFAULT_LANGUAGE, DOWNLOAD_BASENAME, DOWNLOAD_MIME, DownloadArtifact,
};
pub use renderer::{MarkdownRenderer, RenderResult, TocEntry};
pub use util::escape_html;
