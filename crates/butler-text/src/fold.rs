//! Diacritic folding for Western European Latin text.
//!
//! The table is a fixed, hand-maintained list of disjoint character classes.
//! It only covers lowercase letters; callers lowercase first. Anything outside
//! the table, including non-Latin scripts, is left alone.

use std::borrow::Cow;

/// Version of [`ACCENT_TABLE`]. Bump on every data change.
pub const ACCENT_TABLE_VERSION: u32 = 1;

/// Character classes and their ASCII replacements.
pub const ACCENT_TABLE: &[(&str, &str)] = &[
    ("àáâãäåāăą", "a"),
    ("æ", "ae"),
    ("çćĉċč", "c"),
    ("ďđ", "d"),
    ("èéêëēĕėęě", "e"),
    ("ĝğġģ", "g"),
    ("ĥħ", "h"),
    ("ìíîïĩīĭįı", "i"),
    ("ñńņňŉŋ", "n"),
    ("òóôõöōŏő", "o"),
    ("œ", "oe"),
    ("ř", "r"),
    ("śŝşš", "s"),
    ("ß", "ss"),
    ("ùúûüũūŭůűų", "u"),
    ("ýÿ", "y"),
];

/// Look up the replacement for a single character.
fn fold_char(c: char) -> Option<&'static str> {
    if c.is_ascii() {
        return None;
    }
    ACCENT_TABLE
        .iter()
        .find(|(class, _)| class.contains(c))
        .map(|&(_, replacement)| replacement)
}

/// Replace accented and ligature letters with their closest ASCII spelling.
///
/// Returns the input unchanged (borrowed) when no character is covered by
/// the table.
///
/// # Examples
///
/// ```
/// use butler_text::fold_diacritics;
///
/// assert_eq!(fold_diacritics("Café"), "Cafe");
/// assert_eq!(fold_diacritics("Straße"), "Strasse");
/// assert_eq!(fold_diacritics("日本"), "日本");
/// ```
#[must_use]
pub fn fold_diacritics(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| fold_char(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len());
    result.push_str(&text[..first]);
    for c in text[first..].chars() {
        match fold_char(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}
