//! `butler classify` command implementation.

use std::path::Path;

use butler_config::{Config, ErrorsConfig};
use butler_errors::{
    Classifier, Context, Disposition, ErrorHandler, NullTelemetry, Rule, RuleError, TracingLogger,
};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Error raised by the host, known only by its message.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct HostError(String);

/// Arguments for the classify command.
#[derive(Args)]
pub(crate) struct ClassifyArgs {
    /// Error message to classify.
    message: String,

    /// JSON context passed to the logger and telemetry sink.
    #[arg(long)]
    context: Option<String>,
}

impl ClassifyArgs {
    /// Execute the classify command.
    ///
    /// Runs the message through the error handler and prints the applied
    /// disposition.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let context: Context = match &self.context {
            Some(json) => serde_json::from_str(json)?,
            None => Context::Object(serde_json::Map::new()),
        };

        let handler = ErrorHandler::new(Box::new(NullTelemetry), Box::new(TracingLogger))
            .with_classifier(classifier_from_config(&config.errors)?);
        let disposition = handler.handle(&context, &HostError(self.message));

        Output::new().result(disposition_label(disposition));
        Ok(())
    }
}

/// Build a [`Classifier`] from the built-in rules plus the `[errors]` section.
pub(crate) fn classifier_from_config(config: &ErrorsConfig) -> Result<Classifier, RuleError> {
    let mut classifier = Classifier::default();
    for pattern in &config.ignore {
        classifier = classifier.with_rule(Rule::pattern(pattern, Disposition::Ignore)?);
    }
    for pattern in &config.log_only {
        classifier = classifier.with_rule(Rule::pattern(pattern, Disposition::LogOnly)?);
    }
    Ok(classifier)
}

/// Kebab-case name of a disposition.
fn disposition_label(disposition: Disposition) -> &'static str {
    match disposition {
        Disposition::Ignore => "ignore",
        Disposition::LogOnly => "log-only",
        Disposition::ReportAndLog => "report-and-log",
    }
}
