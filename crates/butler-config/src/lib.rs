//! Configuration management for Butler.
//!
//! Parses `butler.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! Every section is optional:
//!
//! ```toml
//! [slug]
//! separator = "-"
//! max_len = 128
//!
//! [markdown]
//! tables = true
//! strikethrough = true
//! tasklists = false
//! footnotes = false
//!
//! [errors]
//! ignore = ["Request aborted"]
//! log_only = ["Rate limited"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override slug separator.
    pub separator: Option<String>,
    /// Override maximum slug length.
    pub max_len: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "butler.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Slug generation configuration.
    pub slug: SlugConfig,
    /// Markdown rendering configuration.
    pub markdown: MarkdownConfig,
    /// Error classification configuration.
    pub errors: ErrorsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Slug generation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Separator joining slug segments.
    pub separator: String,
    /// Maximum slug length in characters.
    pub max_len: usize,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: "-".to_owned(),
            max_len: 128,
        }
    }
}

/// Markdown syntax extensions.
#[derive(Debug, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MarkdownConfig {
    /// Enable tables.
    pub tables: bool,
    /// Enable `~~strikethrough~~`.
    pub strikethrough: bool,
    /// Enable task list checkboxes.
    pub tasklists: bool,
    /// Enable footnotes.
    pub footnotes: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: false,
            footnotes: false,
        }
    }
}

/// Extra error classification rules.
///
/// Patterns are regular expressions anchored at the start of the error
/// message. They are evaluated after the built-in rules, `ignore` first.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorsConfig {
    /// Messages silently ignored.
    pub ignore: Vec<String>,
    /// Messages logged locally but never reported.
    pub log_only: Vec<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `butler.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and validated together with
    /// the file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(separator) = &settings.separator {
            self.slug.separator.clone_from(separator);
        }
        if let Some(max_len) = settings.max_len {
            self.slug.max_len = max_len;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slug.max_len == 0 {
            return Err(ConfigError::Validation(
                "slug.max_len must be greater than 0".to_owned(),
            ));
        }
        for (field, patterns) in [
            ("errors.ignore", &self.errors.ignore),
            ("errors.log_only", &self.errors.log_only),
        ] {
            for pattern in patterns {
                require_non_empty(pattern, field)?;
            }
        }
        Ok(())
    }
}
