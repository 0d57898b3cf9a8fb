//! `butler markdown` command implementation.

use std::path::{Path, PathBuf};

use butler_config::{Config, MarkdownConfig};
use butler_markdown::{MarkdownOptions, MarkdownRenderer};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the markdown command.
#[derive(Args)]
pub(crate) struct MarkdownArgs {
    /// Markdown file to render (default: read stdin).
    file: Option<PathBuf>,
}

impl MarkdownArgs {
    /// Execute the markdown command.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let renderer = MarkdownRenderer::with_options(markdown_options(&config.markdown));

        let source = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => std::io::read_to_string(std::io::stdin())?,
        };
        tracing::info!(bytes = source.len(), "Rendering markdown");

        Output::new().result(&renderer.render(Some(source.as_str())));
        Ok(())
    }
}

/// Map the `[markdown]` section to engine options.
pub(crate) fn markdown_options(config: &MarkdownConfig) -> MarkdownOptions {
    MarkdownOptions {
        tables: config.tables,
        strikethrough: config.strikethrough,
        tasklists: config.tasklists,
        footnotes: config.footnotes,
    }
}
