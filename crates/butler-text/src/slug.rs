//! URL slug generation.

use crate::fold::fold_diacritics;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Maximum slug length in characters.
pub const DEFAULT_MAX_LEN: usize = 128;

/// Slug builder with a fixed separator and length cap.
///
/// # Example
///
/// ```
/// use butler_text::Slugger;
///
/// let slugger = Slugger::new("_").with_max_len(8);
/// assert_eq!(slugger.slug(Some("Hello, World!")), "hello_wo");
/// assert_eq!(slugger.slug(None), "_");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slugger {
    separator: String,
    max_len: usize,
}

impl Default for Slugger {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_owned(),
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl Slugger {
    /// Create a slugger joining segments with `separator`.
    ///
    /// An empty separator joins segments directly.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    /// Set the maximum slug length in characters.
    ///
    /// A cap of zero is ignored.
    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        if max_len > 0 {
            self.max_len = max_len;
        }
        self
    }

    /// Separator joining slug segments.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Maximum slug length in characters.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Result returned when no slug can be derived.
    ///
    /// The separator itself, or [`DEFAULT_SEPARATOR`] when the separator is
    /// empty.
    fn fallback(&self) -> String {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR.to_owned()
        } else {
            self.separator.clone()
        }
    }

    /// Convert text to a slug.
    ///
    /// Lowercases, folds diacritics, collapses every run of characters
    /// outside `[a-z0-9]` into one separator, trims one separator from each
    /// end and caps the length. Absent input, or input with nothing left
    /// after trimming, yields the bare separator (`-` if it is empty).
    #[must_use]
    pub fn slug(&self, text: Option<&str>) -> String {
        let sep = self.separator.as_str();
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return self.fallback();
        };

        let lowered = text.to_lowercase();
        let folded = fold_diacritics(&lowered);

        let mut joined = String::with_capacity(folded.len());
        let mut in_run = false;
        for c in folded.chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                joined.push(c);
                in_run = false;
            } else if !in_run {
                joined.push_str(sep);
                in_run = true;
            }
        }

        let trimmed = joined.strip_prefix(sep).unwrap_or(&joined);
        let trimmed = trimmed.strip_suffix(sep).unwrap_or(trimmed);
        if trimmed.is_empty() {
            return self.fallback();
        }

        match trimmed.char_indices().nth(self.max_len) {
            Some((cut, _)) => {
                tracing::debug!(max_len = self.max_len, "Slug truncated");
                trimmed[..cut].to_owned()
            }
            None => trimmed.to_owned(),
        }
    }
}

/// Convert text to a URL-safe slug of at most 128 characters.
///
/// `separator` defaults to `-`. The result is never empty: when no slug can
/// be derived the separator itself is returned.
///
/// # Examples
///
/// ```
/// use butler_text::make_slug;
///
/// assert_eq!(make_slug(Some("Héllo, World!"), None), "hello-world");
/// assert_eq!(make_slug(Some("!!!"), None), "-");
/// assert_eq!(make_slug(Some(""), Some("_")), "_");
/// ```
#[must_use]
pub fn make_slug(text: Option<&str>, separator: Option<&str>) -> String {
    Slugger::new(separator.unwrap_or(DEFAULT_SEPARATOR)).slug(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_make_slug_basic() {
        assert_eq!(make_slug(Some("Héllo, World!"), None), "hello-world");
        assert_eq!(make_slug(Some("Hello World"), None), "hello-world");
        assert_eq!(make_slug(Some("snake_case"), None), "snake-case");
    }

    #[test]
    fn test_make_slug_only_punctuation() {
        assert_eq!(make_slug(Some("!!!"), None), "-");
        assert_eq!(make_slug(Some("   "), None), "-");
        assert_eq!(make_slug(Some("!!!"), Some("_")), "_");
    }

    #[test]
    fn test_make_slug_absent_input() {
        assert_eq!(make_slug(None, None), "-");
        assert_eq!(make_slug(Some(""), Some("_")), "_");
        assert_eq!(make_slug(None, Some("+")), "+");
    }

    #[test]
    fn test_make_slug_collapses_runs() {
        assert_eq!(make_slug(Some("a   b---c"), None), "a-b-c");
        assert_eq!(make_slug(Some("a , ; b"), Some("_")), "a_b");
    }

    #[test]
    fn test_make_slug_trims_boundaries() {
        assert_eq!(make_slug(Some("  --Hello--  "), None), "hello");
        assert_eq!(make_slug(Some("(draft) plan"), None), "draft-plan");
    }

    #[test]
    fn test_make_slug_truncates_to_128() {
        let text = "a1".repeat(100);
        let slug = make_slug(Some(&text), None);
        assert_eq!(slug.len(), 128);
        assert_eq!(slug, &text[..128]);
    }

    #[test]
    fn test_make_slug_truncation_can_end_with_separator() {
        let text = format!("{} tail", "x".repeat(127));
        let slug = make_slug(Some(&text), None);
        assert_eq!(slug.len(), 128);
        assert!(slug.ends_with('-'));
    }

    #[test]
    fn test_make_slug_uppercase_accent_is_lowered_then_folded() {
        assert_eq!(make_slug(Some("ÉCOLE"), None), "ecole");
        assert_eq!(make_slug(Some("Œuvre Complète"), None), "oeuvre-complete");
    }

    #[test]
    fn test_make_slug_uncovered_letters_become_separators() {
        assert_eq!(make_slug(Some("日本 guide"), None), "guide");
        assert_eq!(make_slug(Some("日本"), None), "-");
    }

    #[test]
    fn test_make_slug_multichar_separator() {
        assert_eq!(make_slug(Some("Hello World"), Some("--")), "hello--world");
        assert_eq!(make_slug(Some("!Hi!"), Some("::")), "hi");
    }

    #[test]
    fn test_make_slug_empty_separator_joins_directly() {
        assert_eq!(make_slug(Some("a b"), Some("")), "ab");
        assert_eq!(make_slug(Some("Héllo, World!"), Some("")), "helloworld");
    }

    #[test]
    fn test_make_slug_empty_separator_never_empty() {
        assert_eq!(make_slug(None, Some("")), "-");
        assert_eq!(make_slug(Some("!!!"), Some("")), "-");
        assert_eq!(Slugger::new("").separator(), "");
    }

    #[test]
    fn test_make_slug_is_idempotent() {
        for text in ["Héllo, World!", "a   b---c", "Straße 12", "!!!"] {
            let once = make_slug(Some(text), None);
            assert_eq!(make_slug(Some(&once), None), once);
        }
    }

    #[test]
    fn test_slugger_max_len() {
        let slugger = Slugger::default().with_max_len(5);
        assert_eq!(slugger.slug(Some("Hello World")), "hello");
        assert_eq!(slugger.max_len(), 5);
    }

    #[test]
    fn test_slugger_zero_max_len_ignored() {
        let slugger = Slugger::default().with_max_len(0);
        assert_eq!(slugger.max_len(), DEFAULT_MAX_LEN);
    }

    #[test]
    fn test_slugger_truncates_by_chars() {
        let slugger = Slugger::new("→").with_max_len(3);
        assert_eq!(slugger.slug(Some("a b c")), "a→b");
    }
}
