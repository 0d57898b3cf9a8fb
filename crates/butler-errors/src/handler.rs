//! Central error handler.

use std::error::Error;

use crate::Context;
use crate::classifier::{Classifier, Disposition, Rule};
use crate::sink::{LocalLogger, NullTelemetry, TelemetrySink, TracingLogger};

/// Routes errors to the local logger and telemetry sink by message shape.
///
/// The error message is its `Display` output. Inputs are passed through to
/// the collaborators untouched.
///
/// # Example
///
/// ```
/// use butler_errors::{Disposition, ErrorHandler};
/// use serde_json::json;
///
/// let handler = ErrorHandler::default();
/// let error = std::io::Error::other("Invalid context, missing board abc");
/// assert_eq!(handler.handle(&json!({}), &error), Disposition::Ignore);
/// ```
pub struct ErrorHandler {
    classifier: Classifier,
    telemetry: Box<dyn TelemetrySink>,
    logger: Box<dyn LocalLogger>,
}

impl Default for ErrorHandler {
    fn default() -> Self {
        Self::new(Box::new(NullTelemetry), Box::new(TracingLogger))
    }
}

impl ErrorHandler {
    /// Create a handler with the built-in classification rules.
    #[must_use]
    pub fn new(telemetry: Box<dyn TelemetrySink>, logger: Box<dyn LocalLogger>) -> Self {
        Self {
            classifier: Classifier::default(),
            telemetry,
            logger,
        }
    }

    /// Replace the classification rules.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Classification rules in use.
    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify `error` and dispatch it.
    ///
    /// - [`Disposition::Ignore`]: nothing is emitted.
    /// - [`Disposition::LogOnly`]: one notice on the local logger.
    /// - [`Disposition::ReportAndLog`]: one telemetry report and one local
    ///   error log, both with the original error and context.
    pub fn handle(&self, context: &Context, error: &dyn Error) -> Disposition {
        let message = error.to_string();
        let (disposition, rule) = self.classifier.classify_with_rule(&message);

        match disposition {
            Disposition::Ignore => {}
            Disposition::LogOnly => {
                let notice = rule.and_then(Rule::notice).unwrap_or(&message);
                self.logger.log_notice(notice);
            }
            Disposition::ReportAndLog => {
                self.telemetry.report(error, context);
                self.logger.log_error(error, context);
            }
        }

        disposition
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Report { message: String, context: Value },
        LogError { message: String, context: Value },
        LogNotice(String),
    }

    /// Records every collaborator call in order.
    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn handler(&self) -> ErrorHandler {
            ErrorHandler::new(Box::new(self.clone()), Box::new(self.clone()))
        }
    }

    impl TelemetrySink for Recorder {
        fn report(&self, error: &dyn Error, context: &Value) {
            self.calls.lock().unwrap().push(Call::Report {
                message: error.to_string(),
                context: context.clone(),
            });
        }
    }

    impl LocalLogger for Recorder {
        fn log_error(&self, error: &dyn Error, context: &Value) {
            self.calls.lock().unwrap().push(Call::LogError {
                message: error.to_string(),
                context: context.clone(),
            });
        }

        fn log_notice(&self, message: &str) {
            self.calls
                .lock()
                .unwrap()
                .push(Call::LogNotice(message.to_owned()));
        }
    }

    fn error(message: &str) -> std::io::Error {
        std::io::Error::other(message.to_owned())
    }

    #[test]
    fn test_missing_board_calls_nothing() {
        let recorder = Recorder::default();
        let disposition = recorder
            .handler()
            .handle(&json!({"card": 1}), &error("Invalid context, missing board foo"));

        assert_eq!(disposition, Disposition::Ignore);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_plugin_disabled_only_logs_locally() {
        let recorder = Recorder::default();
        let disposition = recorder
            .handler()
            .handle(&json!({}), &error("Plugin disabled on board X"));

        assert_eq!(disposition, Disposition::LogOnly);
        assert_eq!(
            recorder.calls(),
            vec![Call::LogNotice("Power-Up disabled on board.".to_owned())]
        );
    }

    #[test]
    fn test_unexpected_reported_and_logged_once() {
        let recorder = Recorder::default();
        let context = json!({"board": "b1", "action": "run-rule"});
        let disposition = recorder
            .handler()
            .handle(&context, &error("Cannot read property 'id' of null"));

        assert_eq!(disposition, Disposition::ReportAndLog);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::Report {
                    message: "Cannot read property 'id' of null".to_owned(),
                    context: context.clone(),
                },
                Call::LogError {
                    message: "Cannot read property 'id' of null".to_owned(),
                    context,
                },
            ]
        );
    }

    #[test]
    fn test_log_only_rule_without_notice_logs_message() {
        let recorder = Recorder::default();
        let handler = recorder.handler().with_classifier(
            Classifier::default()
                .with_rule(Rule::prefix("Rate limited", Disposition::LogOnly).unwrap()),
        );

        handler.handle(&Value::Null, &error("Rate limited, retry in 5s"));

        assert_eq!(
            recorder.calls(),
            vec![Call::LogNotice("Rate limited, retry in 5s".to_owned())]
        );
    }

    #[test]
    fn test_custom_ignore_rule() {
        let recorder = Recorder::default();
        let handler = recorder.handler().with_classifier(
            Classifier::default().with_rule(Rule::prefix("Aborted", Disposition::Ignore).unwrap()),
        );

        assert_eq!(
            handler.handle(&Value::Null, &error("Aborted by user")),
            Disposition::Ignore
        );
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_default_handler_uses_builtin_rules() {
        let handler = ErrorHandler::default();
        assert_eq!(handler.classifier().rules().len(), 2);
        assert_eq!(
            handler.handle(&json!({}), &error("boom")),
            Disposition::ReportAndLog
        );
    }
}
