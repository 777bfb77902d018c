//! Markdown to HTML rendering.
//!
//! Wraps `pulldown-cmark` and rewrites three kinds of events before HTML
//! output: headings get stable anchor ids (and feed the table of contents),
//! fenced code blocks become [`CodeSample`] widgets, and GitHub-style alert
//! blockquotes become alert boxes.

use std::fmt::Write;
use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use pulldown_cmark::{
    BlockQuoteKind, CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};

use crate::code_sample::{CodeSample, CopyFeedback, DEFAULT_LANGUAGE};
use crate::util::{SlugGenerator, escape_html};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Heading level (2-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor id.
    pub id: String,
}

/// Result of rendering one page.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Text of the first H1 heading.
    pub title: Option<String>,
    /// Rendered HTML fragment.
    pub html: String,
    /// Headings below the title, in document order.
    pub toc: Vec<TocEntry>,
    /// Code samples, indexed by their position in the page.
    pub samples: Vec<CodeSample>,
}

/// Markdown renderer for documentation pages.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    default_language: String,
    copied_feedback: Duration,
    samples_endpoint: String,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with the default sample language and copy feedback.
    pub fn new() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_owned(),
            copied_feedback: CopyFeedback::DEFAULT_DURATION,
            samples_endpoint: "/api/samples".to_owned(),
        }
    }

    /// Language for code fences without an info string.
    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Duration of the "Copied" acknowledgment emitted into widgets.
    #[must_use]
    pub fn with_copied_feedback(mut self, duration: Duration) -> Self {
        self.copied_feedback = duration;
        self
    }

    /// Endpoint that serves sample downloads.
    #[must_use]
    pub fn with_samples_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.samples_endpoint = endpoint.into();
        self
    }

    /// Render `markdown` for the page served at `page_path`.
    pub fn render(&self, page_path: &str, markdown: &str) -> RenderResult {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_GFM
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut state = RenderState::default();
        let mut events: Vec<Event<'_>> = Vec::new();

        for event in parser {
            match event {
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }) => {
                    state.heading = Some(HeadingBuffer {
                        level,
                        explicit_id: id.map(CowStr::into_string),
                        classes,
                        attrs,
                        events: Vec::new(),
                        text: String::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(buffer) = state.heading.take() {
                        state.finish_heading(buffer, &mut events);
                    }
                }
                Event::Start(Tag::CodeBlock(kind)) => {
                    let info = match kind {
                        CodeBlockKind::Fenced(info) => info.into_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    state.code = Some((info, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((info, text)) = state.code.take() {
                        let html = self.finish_code_block(page_path, &info, &text, &mut state);
                        events.push(Event::Html(CowStr::from(html)));
                    }
                }
                Event::Text(text) if state.code.is_some() => {
                    if let Some((_, buffer)) = state.code.as_mut() {
                        buffer.push_str(&text);
                    }
                }
                Event::Start(Tag::BlockQuote(Some(kind))) => {
                    events.push(Event::Html(CowStr::from(alert_start(kind))));
                }
                Event::End(TagEnd::BlockQuote(Some(_))) => {
                    events.push(Event::Html(CowStr::Borrowed("</div></div>\n")));
                }
                other => {
                    if let Some(buffer) = state.heading.as_mut() {
                        if let Event::Text(text) | Event::Code(text) = &other {
                            buffer.text.push_str(text);
                        }
                        buffer.events.push(other);
                    } else {
                        events.push(other);
                    }
                }
            }
        }

        let mut html = String::with_capacity(markdown.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());

        RenderResult {
            title: state.title,
            html,
            toc: state.toc,
            samples: state.samples,
        }
    }

    /// Turn a finished code block into a sample and its widget HTML.
    fn finish_code_block(
        &self,
        page_path: &str,
        info: &str,
        text: &str,
        state: &mut RenderState,
    ) -> String {
        let (language, filename) = parse_fence_info(info);
        // Fenced content always ends with the newline before the closing fence
        let code = text.strip_suffix('\n').unwrap_or(text);

        let mut sample = CodeSample::new(code)
            .with_language(language.unwrap_or_else(|| self.default_language.clone()));
        if let Some(filename) = filename {
            sample = sample.with_filename(filename);
        }

        let index = state.samples.len();
        let url = format!(
            "{}?page={}&index={index}",
            self.samples_endpoint,
            utf8_percent_encode(page_path, NON_ALPHANUMERIC)
        );

        let mut html = String::new();
        sample.render_widget(&url, self.copied_feedback, &mut html);
        state.samples.push(sample);
        html
    }
}

/// Heading whose inline events are held back until its anchor is known.
struct HeadingBuffer<'a> {
    level: HeadingLevel,
    explicit_id: Option<String>,
    classes: Vec<CowStr<'a>>,
    attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    events: Vec<Event<'a>>,
    text: String,
}

#[derive(Default)]
struct RenderState<'a> {
    title: Option<String>,
    toc: Vec<TocEntry>,
    samples: Vec<CodeSample>,
    slugs: SlugGenerator,
    heading: Option<HeadingBuffer<'a>>,
    code: Option<(String, String)>,
}

impl<'a> RenderState<'a> {
    fn finish_heading(&mut self, buffer: HeadingBuffer<'a>, events: &mut Vec<Event<'a>>) {
        let text = buffer.text.trim().to_owned();
        let id = buffer
            .explicit_id
            .unwrap_or_else(|| self.slugs.unique(&text));
        let level = heading_level_to_num(buffer.level);

        if level == 1 && self.title.is_none() {
            self.title = Some(text);
        } else if level >= 2 {
            self.toc.push(TocEntry {
                level,
                title: text,
                id: id.clone(),
            });
        }

        events.push(Event::Start(Tag::Heading {
            level: buffer.level,
            id: Some(CowStr::from(id)),
            classes: buffer.classes,
            attrs: buffer.attrs,
        }));
        events.extend(buffer.events);
        events.push(Event::End(TagEnd::Heading(buffer.level)));
    }
}

/// Split a fence info string into language and `filename=` attribute.
///
/// `python filename=scatter.py` → (`Some("python")`, `Some("scatter.py")`).
fn parse_fence_info(info: &str) -> (Option<String>, Option<String>) {
    let mut language = None;
    let mut filename = None;
    for token in info.split_whitespace() {
        if let Some(value) = token.strip_prefix("filename=") {
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            if !value.is_empty() {
                filename = Some(value.to_owned());
            }
        } else if language.is_none() && !token.contains('=') {
            language = Some(token.to_owned());
        }
    }
    (language, filename)
}

fn alert_start(kind: BlockQuoteKind) -> String {
    let (class, title) = match kind {
        BlockQuoteKind::Note => ("note", "Note"),
        BlockQuoteKind::Tip => ("tip", "Tip"),
        BlockQuoteKind::Important => ("important", "Important"),
        BlockQuoteKind::Warning => ("warning", "Warning"),
        BlockQuoteKind::Caution => ("caution", "Caution"),
    };
    let mut out = String::new();
    write!(
        out,
        r#"<div class="alert alert-{class}"><div class="alert-title">{}</div><div class="alert-content">"#,
        escape_html(title)
    )
    .unwrap();
    out
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
