//! Error destinations.

use std::error::Error;

use crate::Context;

/// Upstream collector for unexpected errors.
///
/// Fire-and-forget: implementations must not block the caller on delivery.
pub trait TelemetrySink: Send + Sync {
    /// Report an unexpected error with its context.
    fn report(&self, error: &dyn Error, context: &Context);
}

/// Local, in-process log for errors and notices.
pub trait LocalLogger: Send + Sync {
    /// Log an unexpected error with its context.
    fn log_error(&self, error: &dyn Error, context: &Context);

    /// Log an informational notice about an expected error.
    fn log_notice(&self, message: &str);
}

/// [`TelemetrySink`] that discards every report.
///
/// Use when no telemetry backend is configured.
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn report(&self, _error: &dyn Error, _context: &Context) {}
}

/// [`LocalLogger`] emitting `tracing` events.
///
/// Errors are logged at `error` level with the context as a structured
/// field; notices at `info` level.
pub struct TracingLogger;

impl LocalLogger for TracingLogger {
    fn log_error(&self, error: &dyn Error, context: &Context) {
        tracing::error!(error = %error, context = %context, "Unexpected error");
    }

    fn log_notice(&self, message: &str) {
        tracing::info!("{message}");
    }
}
