//! CLI command implementations.

pub(crate) mod classify;
pub(crate) mod markdown;
pub(crate) mod slug;
pub(crate) mod text;

use std::io::Read;

pub(crate) use classify::ClassifyArgs;
pub(crate) use markdown::MarkdownArgs;
pub(crate) use slug::SlugArgs;
pub(crate) use text::{EscapeArgs, FoldArgs, TabArgs};

use crate::error::CliError;

/// Use `arg` when given, otherwise read all of `reader`.
///
/// Text read from the reader loses its trailing line break so that
/// `echo "x" | butler slug` behaves like `butler slug x`.
pub(crate) fn text_or_read(arg: Option<String>, reader: impl Read) -> Result<String, CliError> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut text = std::io::read_to_string(reader)?;
    let trimmed_len = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed_len);
    Ok(text)
}

/// Use `arg` when given, otherwise read stdin.
pub(crate) fn text_or_stdin(arg: Option<String>) -> Result<String, CliError> {
    text_or_read(arg, std::io::stdin())
}
