//! Code sample viewer.
//!
//! A [`CodeSample`] is an immutable block of sample text with two user
//! actions: copy to a [`Clipboard`] and download as a [`DownloadArtifact`].
//! The transient "Copied" acknowledgment is tracked by [`CopyFeedback`].

use std::fmt::Write;
use std::time::{Duration, Instant};

use crate::util::escape_html;

/// Language assumed when a sample does not name one.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Base name of generated download filenames.
pub const DOWNLOAD_BASENAME: &str = "code";

/// MIME type of downloaded samples.
pub const DOWNLOAD_MIME: &str = "text/plain";

/// Label of the copy control in its default state.
pub const COPY_LABEL: &str = "Copy";

/// Label of the copy control while the acknowledgment is showing.
pub const COPIED_LABEL: &str = "Copied";

/// A literal sample of source code or configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeSample {
    code: String,
    language: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    filename: Option<String>,
}

impl CodeSample {
    /// Create a sample in the default language with no filename.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: DEFAULT_LANGUAGE.to_owned(),
            filename: None,
        }
    }

    /// Set the language label.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the filename used as caption and download name.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// The literal sample text.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The language label.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The supplied filename, if any.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Caption shown in the widget header: filename, else language.
    pub fn caption(&self) -> &str {
        self.filename.as_deref().unwrap_or(&self.language)
    }

    /// Filename of the downloaded file.
    ///
    /// The supplied filename wins. Otherwise `code.py` for python samples and
    /// `code.txt` for everything else.
    pub fn download_filename(&self) -> String {
        if let Some(filename) = &self.filename {
            return filename.clone();
        }
        let extension = if self.language == "python" { "py" } else { "txt" };
        format!("{DOWNLOAD_BASENAME}.{extension}")
    }

    /// Produce the downloadable file for this sample.
    pub fn download(&self) -> DownloadArtifact {
        DownloadArtifact {
            filename: self.download_filename(),
            mime: DOWNLOAD_MIME,
            content: self.code.clone(),
        }
    }

    /// Place the sample text on `clipboard` and start the acknowledgment.
    ///
    /// A clipboard failure is returned to the caller and the acknowledgment
    /// is left as it was.
    pub fn copy(
        &self,
        clipboard: &mut dyn Clipboard,
        feedback: &mut CopyFeedback,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        clipboard.write_text(&self.code)?;
        feedback.acknowledge(now);
        Ok(())
    }

    /// Append the viewer widget HTML to `out`.
    ///
    /// `download_url` must point at an endpoint that serves [`Self::download`].
    pub fn render_widget(&self, download_url: &str, copied_feedback: Duration, out: &mut String) {
        let filename = escape_html(&self.download_filename());
        write!(
            out,
            concat!(
                r#"<figure class="code-sample">"#,
                r#"<figcaption class="code-sample-header">"#,
                r#"<span class="code-sample-caption">{caption}</span>"#,
                r#"<span class="code-sample-actions">"#,
                r#"<a class="code-sample-action code-sample-download" href="{url}" download="{filename}">Download</a>"#,
                r#"<button type="button" class="code-sample-action code-sample-copy" data-copied-ms="{ms}" data-label="{copy}" data-copied-label="{copied}">{copy}</button>"#,
                r#"</span></figcaption>"#,
                r#"<pre><code class="language-{lang}">{code}</code></pre>"#,
                "</figure>\n",
            ),
            caption = escape_html(self.caption()),
            url = escape_html(download_url),
            filename = filename,
            ms = copied_feedback.as_millis(),
            copy = COPY_LABEL,
            copied = COPIED_LABEL,
            lang = escape_html(&self.language),
            code = escape_html(&self.code),
        )
        .unwrap();
    }
}

/// A file produced by [`CodeSample::download`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadArtifact {
    /// Suggested filename.
    pub filename: String,
    /// MIME type.
    pub mime: &'static str,
    /// File content, identical to the sample text.
    pub content: String,
}

/// Destination for copied text.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard write failure. Local to the copy action.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The host offers no clipboard.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// Writing to the clipboard failed.
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Transient "Copied" acknowledgment state.
///
/// A repeated copy moves the deadline forward instead of stacking timers.
#[derive(Clone, Debug)]
pub struct CopyFeedback {
    duration: Duration,
    visible_until: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

impl CopyFeedback {
    /// Acknowledgment duration used by the reference site.
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

    /// Create feedback state showing the acknowledgment for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            visible_until: None,
        }
    }

    /// How long the acknowledgment stays visible.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start (or restart) the acknowledgment at `now`.
    pub fn acknowledge(&mut self, now: Instant) {
        self.visible_until = Some(now + self.duration);
    }

    /// Whether the acknowledgment is showing at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.visible_until.is_some_and(|until| now < until)
    }

    /// Label of the copy control at `now`.
    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}
