//! Text normalization utilities for Butler.
//!
//! Small, total functions over strings:
//!
//! - [`escape_html`]: Escape the six HTML-significant characters
//! - [`fold_diacritics`]: Replace accented Latin letters with ASCII
//! - [`make_slug`] / [`Slugger`]: Build URL-safe, bounded-length slugs
//! - [`normalize_tab_name`]: Map historical tab identifiers to canonical ones
//!
//! # Example
//!
//! ```
//! use butler_text::{escape_html, make_slug};
//!
//! assert_eq!(make_slug(Some("Héllo, World!"), None), "hello-world");
//! assert_eq!(escape_html("<b>"), "&lt;b&gt;");
//! ```

mod escape;
mod fold;
mod slug;
mod tabs;

pub use escape::escape_html;
pub use fold::{ACCENT_TABLE, ACCENT_TABLE_VERSION, fold_diacritics};
pub use slug::{DEFAULT_MAX_LEN, DEFAULT_SEPARATOR, Slugger, make_slug};
pub use tabs::normalize_tab_name;
