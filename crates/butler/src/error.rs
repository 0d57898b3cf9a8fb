//! CLI error types.

use butler_config::ConfigError;
use butler_errors::RuleError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Rule(#[from] RuleError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid context JSON: {0}")]
    Json(#[from] serde_json::Error),
}
