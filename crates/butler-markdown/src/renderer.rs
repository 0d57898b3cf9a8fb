//! Markdown renderer owning a single engine instance.

use crate::engine::{MarkdownEngine, MarkdownOptions, SanitizingEngine};

/// Renders user-provided markdown through one long-lived [`MarkdownEngine`].
///
/// The engine is built once, when the renderer is constructed, and reused for
/// every call. Absent input renders as empty markdown.
pub struct MarkdownRenderer<E = SanitizingEngine> {
    engine: E,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(SanitizingEngine::default())
    }
}

impl MarkdownRenderer {
    /// Create a renderer backed by a [`SanitizingEngine`] with `options`.
    #[must_use]
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self::new(SanitizingEngine::new(options))
    }
}

impl<E: MarkdownEngine> MarkdownRenderer<E> {
    /// Create a renderer around an existing engine.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Engine used for rendering.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Render markdown to sanitized HTML.
    ///
    /// `None` is treated as the empty string. Failures inside the engine are
    /// not wrapped.
    #[must_use]
    pub fn render(&self, text: Option<&str>) -> String {
        let source = text.unwrap_or_default();
        let html = self.engine.render(source);
        tracing::debug!(
            source_len = source.len(),
            html_len = html.len(),
            "Rendered markdown"
        );
        html
    }
}
