//! Error types.
//!
//! Matching itself never fails: an input that no rule recognizes gets the
//! fallback response. Errors only come from building custom rule tables and
//! from the I/O of the interactive session.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A rule or rule table failed validation.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Reading user input or writing a response failed.
    #[error("session I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems detected while building a [`Rule`](crate::Rule) or a
/// [`RuleTable`](crate::RuleTable).
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule '{rule}': invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        rule: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule '{rule}' has no responses")]
    NoResponses { rule: String },

    #[error("rule '{rule}': no patterns given")]
    NoPatterns { rule: String },

    /// A template refers to a capture group the pattern does not have.
    #[error("rule '{rule}': template '{template}' uses placeholder {{{index}}} but pattern '{pattern}' has {groups} capture group(s)")]
    PlaceholderOutOfRange { rule: String, template: String, pattern: String, index: usize, groups: usize },

    #[error("rule table is empty")]
    EmptyTable,

    #[error("duplicate rule name '{rule}'")]
    DuplicateRule { rule: String },
}
