//! Markdown rendering for component descriptions.
//!
//! The document builder never picks a markdown engine itself; it takes any
//! [`MarkdownRenderer`]. Closures work too:
//!
//! ```rust
//! use vize_folio::markdown::MarkdownRenderer;
//!
//! let upper = |source: &str| source.to_uppercase();
//! assert_eq!(upper.render("hi"), "HI");
//! ```

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};

/// Converts markdown text to markup.
pub trait MarkdownRenderer {
    /// Render `source` to markup.
    fn render(&self, source: &str) -> String;
}

impl<F> MarkdownRenderer for F
where
    F: Fn(&str) -> String,
{
    #[inline]
    fn render(&self, source: &str) -> String {
        self(source)
    }
}

/// Options for the [`CommonMark`] renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownOptions {
    /// GitHub-style tables.
    #[serde(default = "default_true")]
    pub tables: bool,

    /// `~~strikethrough~~`.
    #[serde(default = "default_true")]
    pub strikethrough: bool,

    /// Curly quotes and dashes.
    #[serde(default)]
    pub smart_punctuation: bool,

    /// `[^1]` footnotes.
    #[serde(default)]
    pub footnotes: bool,
}

impl Default for MarkdownOptions {
    #[inline]
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            smart_punctuation: false,
            footnotes: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl MarkdownOptions {
    fn to_parser_options(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.smart_punctuation {
            options.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        options
    }
}

/// CommonMark renderer backed by `pulldown-cmark`.
///
/// Indentation shared by every line is stripped before parsing, so a
/// description written as an indented block of text stays a paragraph
/// instead of becoming a code block.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark {
    options: MarkdownOptions,
}

impl CommonMark {
    /// Renderer with the given options.
    #[inline]
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[inline]
    pub fn options(&self) -> MarkdownOptions {
        self.options
    }
}

impl MarkdownRenderer for CommonMark {
    fn render(&self, source: &str) -> String {
        let source = dedent(source);
        let parser = Parser::new_ext(&source, self.options.to_parser_options());

        let mut out = String::with_capacity(source.len() + source.len() / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Renderer that does no markdown processing: text is HTML-escaped and
/// blank-line separated blocks become paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl MarkdownRenderer for PlainText {
    fn render(&self, source: &str) -> String {
        let source = dedent(source);
        let mut out = String::with_capacity(source.len() + 16);

        for paragraph in source.split("\n\n") {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }
            out.push_str("<p>");
            escape_html_into(&mut out, paragraph);
            out.push_str("</p>\n");
        }

        out
    }
}

fn escape_html_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Strip the indentation common to all non-blank lines.
fn dedent(source: &str) -> String {
    let indent = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        // Blank lines may be shorter than the indent.
        let stripped = line.get(indent..).unwrap_or_else(|| line.trim_start());
        out.push_str(stripped);
        out.push('\n');
    }
    out
}
