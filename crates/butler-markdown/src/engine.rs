//! Markdown engines.
//!
//! An engine turns markdown source into HTML that is safe to inject into a
//! trusted page: no script elements, no inline event handlers, no
//! `javascript:` URLs.

use ammonia::Builder;
use pulldown_cmark::{Options, Parser, html};

/// Markdown-to-HTML conversion with a sanitization guarantee.
///
/// Implementations must never emit executable script content. The renderer
/// relies on this and does not sanitize again.
pub trait MarkdownEngine {
    /// Render markdown source to sanitized HTML.
    fn render(&self, source: &str) -> String;
}

/// Markdown syntax extensions enabled on top of `CommonMark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct MarkdownOptions {
    /// GitHub-style tables.
    pub tables: bool,
    /// `~~strikethrough~~`.
    pub strikethrough: bool,
    /// `- [x]` task list items, rendered as disabled checkboxes.
    pub tasklists: bool,
    /// `[^1]` footnotes.
    pub footnotes: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: false,
            footnotes: false,
        }
    }
}

impl MarkdownOptions {
    fn parser_options(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options
    }
}

/// Default engine: `pulldown-cmark` parsing followed by an `ammonia`
/// allow-list clean.
///
/// Raw HTML in the source is kept only when it survives the allow-list.
pub struct SanitizingEngine {
    options: MarkdownOptions,
    cleaner: Builder<'static>,
}

impl Default for SanitizingEngine {
    fn default() -> Self {
        Self::new(MarkdownOptions::default())
    }
}

impl SanitizingEngine {
    /// Create an engine with the given syntax extensions.
    #[must_use]
    pub fn new(options: MarkdownOptions) -> Self {
        let mut cleaner = Builder::default();
        if options.tasklists {
            cleaner
                .add_tags(&["input"])
                .add_tag_attributes("input", &["type", "checked", "disabled"]);
        }
        Self { options, cleaner }
    }

    /// Syntax extensions this engine was built with.
    #[must_use]
    pub fn options(&self) -> MarkdownOptions {
        self.options
    }
}

impl MarkdownEngine for SanitizingEngine {
    fn render(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options.parser_options());
        let mut unsafe_html = String::with_capacity(source.len() + source.len() / 2);
        html::push_html(&mut unsafe_html, parser);
        self.cleaner.clean(&unsafe_html).to_string()
    }
}
