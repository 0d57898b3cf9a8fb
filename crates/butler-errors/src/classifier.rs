//! Rule-based classification of error messages.

use std::sync::LazyLock;

use regex::Regex;

/// Benign race in the host: the board context is not ready yet.
static MISSING_BOARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Invalid context, missing board").unwrap());

/// The Power-Up was disabled while a request was in flight.
static PLUGIN_DISABLED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Plugin disabled on board").unwrap());

/// Notice logged for the built-in "plugin disabled" rule.
const PLUGIN_DISABLED_NOTICE: &str = "Power-Up disabled on board.";

/// What to do with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Expected and benign: no logging, no reporting.
    Ignore,
    /// Expected: log locally, never report upstream.
    LogOnly,
    /// Unexpected: report upstream and log locally.
    ReportAndLog,
}

/// Invalid classification rule.
#[derive(Debug, thiserror::Error)]
#[error("Invalid error pattern '{pattern}': {source}")]
pub struct RuleError {
    /// Pattern as written by the caller.
    pub pattern: String,
    /// Underlying regex compilation error.
    #[source]
    pub source: regex::Error,
}

/// A single classification rule: a start-anchored pattern and its disposition.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    disposition: Disposition,
    notice: Option<String>,
}

impl Rule {
    /// Match messages starting with the literal `prefix`.
    pub fn prefix(prefix: &str, disposition: Disposition) -> Result<Self, RuleError> {
        Self::pattern(&regex::escape(prefix), disposition)
    }

    /// Match messages whose start matches the regular expression `pattern`.
    ///
    /// The pattern is anchored at the start of the message; a leading `^` is
    /// accepted but not required.
    pub fn pattern(pattern: &str, disposition: Disposition) -> Result<Self, RuleError> {
        let anchored = format!("^(?:{})", pattern.strip_prefix('^').unwrap_or(pattern));
        let pattern_re = Regex::new(&anchored).map_err(|source| RuleError {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            pattern: pattern_re,
            disposition,
            notice: None,
        })
    }

    /// Log `notice` instead of the error message when this rule yields
    /// [`Disposition::LogOnly`].
    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    /// Disposition applied when the rule matches.
    #[must_use]
    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Notice logged for [`Disposition::LogOnly`] matches, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Check whether `message` matches this rule.
    #[must_use]
    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }
}

/// Ordered list of classification rules.
///
/// The first matching rule wins. Messages matching no rule are
/// [`Disposition::ReportAndLog`].
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    /// Classifier with the built-in host rules.
    fn default() -> Self {
        Self {
            rules: vec![
                Rule {
                    pattern: MISSING_BOARD_RE.clone(),
                    disposition: Disposition::Ignore,
                    notice: None,
                },
                Rule {
                    pattern: PLUGIN_DISABLED_RE.clone(),
                    disposition: Disposition::LogOnly,
                    notice: Some(PLUGIN_DISABLED_NOTICE.to_owned()),
                },
            ],
        }
    }
}

impl Classifier {
    /// Create a classifier with no rules: everything is reported.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, evaluated after all existing rules.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find the first rule matching `message`.
    #[must_use]
    pub fn matching_rule(&self, message: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(message))
    }

    /// Classify an error message, returning the matched rule alongside.
    ///
    /// The rule is `None` for unmatched messages, which are
    /// [`Disposition::ReportAndLog`].
    #[must_use]
    pub fn classify_with_rule(&self, message: &str) -> (Disposition, Option<&Rule>) {
        let rule = self.matching_rule(message);
        let disposition = rule.map_or(Disposition::ReportAndLog, Rule::disposition);
        (disposition, rule)
    }

    /// Classify an error message.
    #[must_use]
    pub fn classify(&self, message: &str) -> Disposition {
        self.classify_with_rule(message).0
    }
}
