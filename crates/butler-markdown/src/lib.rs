//! Sanitizing markdown rendering for Butler.
//!
//! [`MarkdownRenderer`] owns one [`MarkdownEngine`] for its whole lifetime.
//! The default [`SanitizingEngine`] parses with `pulldown-cmark` and cleans the
//! result with `ammonia`, so the HTML it returns can be injected into a trusted
//! page.
//!
//! # Example
//!
//! ```
//! use butler_markdown::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::default();
//! let html = renderer.render(Some("**Bold** <script>alert(1)</script>"));
//! assert!(html.contains("<strong>Bold</strong>"));
//! assert!(!html.contains("<script"));
//! ```

mod engine;
mod renderer;

pub use engine::{MarkdownEngine, MarkdownOptions, SanitizingEngine};
pub use renderer::MarkdownRenderer;
