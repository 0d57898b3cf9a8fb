//! `butler slug` command implementation.

use std::path::Path;

use butler_config::{CliSettings, Config, SlugConfig};
use butler_text::Slugger;
use clap::Args;

use super::text_or_stdin;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the slug command.
#[derive(Args)]
pub(crate) struct SlugArgs {
    /// Text to convert (default: read stdin).
    text: Option<String>,

    /// Separator joining slug segments (overrides config).
    #[arg(short, long)]
    separator: Option<String>,

    /// Maximum slug length in characters (overrides config).
    #[arg(long)]
    max_len: Option<usize>,
}

impl SlugArgs {
    /// Execute the slug command.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            separator: self.separator,
            max_len: self.max_len,
        };
        let text = text_or_stdin(self.text)?;
        let slug = slug_with_config(config_path, &cli_settings, &text)?;
        Output::new().result(&slug);
        Ok(())
    }
}

/// Load configuration, apply flag overrides and slug `text`.
fn slug_with_config(
    config_path: Option<&Path>,
    cli_settings: &CliSettings,
    text: &str,
) -> Result<String, CliError> {
    let config = Config::load(config_path, Some(cli_settings))?;
    Ok(slugger_from_config(&config.slug).slug(Some(text)))
}

/// Build a [`Slugger`] from the `[slug]` section.
pub(crate) fn slugger_from_config(config: &SlugConfig) -> Slugger {
    Slugger::new(config.separator.as_str()).with_max_len(config.max_len)
}
