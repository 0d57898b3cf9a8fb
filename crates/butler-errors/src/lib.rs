//! Error classification and reporting for Butler.
//!
//! Errors raised by the host board API carry no type information, so they are
//! classified by the shape of their message. A [`Classifier`] holds an ordered
//! list of start-anchored [`Rule`]s, each mapping to a [`Disposition`]:
//!
//! - [`Disposition::Ignore`]: known benign races, dropped silently
//! - [`Disposition::LogOnly`]: expected conditions, logged locally
//! - [`Disposition::ReportAndLog`]: everything else
//!
//! [`ErrorHandler`] applies the disposition using a [`TelemetrySink`] and a
//! [`LocalLogger`].

mod classifier;
mod handler;
mod sink;

pub use classifier::{Classifier, Disposition, Rule, RuleError};
pub use handler::ErrorHandler;
pub use sink::{LocalLogger, NullTelemetry, TelemetrySink, TracingLogger};

/// Opaque structured context attached to a reported error.
pub type Context = serde_json::Value;
