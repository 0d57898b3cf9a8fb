//! `butler escape`, `butler fold` and `butler tab` commands.

use butler_text::{escape_html, fold_diacritics, normalize_tab_name};
use clap::Args;

use super::text_or_stdin;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the escape command.
#[derive(Args)]
pub(crate) struct EscapeArgs {
    /// Text to escape (default: read stdin).
    text: Option<String>,
}

impl EscapeArgs {
    /// Execute the escape command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = text_or_stdin(self.text)?;
        Output::new().result(&escape_html(&text));
        Ok(())
    }
}

/// Arguments for the fold command.
#[derive(Args)]
pub(crate) struct FoldArgs {
    /// Text to fold (default: read stdin).
    text: Option<String>,
}

impl FoldArgs {
    /// Execute the fold command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = text_or_stdin(self.text)?;
        Output::new().result(&fold_diacritics(&text));
        Ok(())
    }
}

/// Arguments for the tab command.
#[derive(Args)]
pub(crate) struct TabArgs {
    /// Tab identifier, possibly a historical alias.
    name: String,
}

impl TabArgs {
    /// Execute the tab command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let canonical = normalize_tab_name(&self.name);
        if canonical.is_empty() {
            output.detail("(default view)");
        }
        output.result(canonical);
        Ok(())
    }
}
