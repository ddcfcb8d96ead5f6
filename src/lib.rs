use regex::Regex;
use std::borrow::Cow;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod lexicon;
pub mod rules;
pub mod session;

pub use api::{MatchSummary, Reply, Responder, reply_with, respond, respond_with};
pub use engine::{Lemmatizer, Match, Normalizer, Template};
pub use error::{Error, Result, RuleError};
pub use lexicon::Lexicon;
pub use rules::{FALLBACK_RESPONSE, FAREWELLS, RuleTable};
pub use session::{EXIT_KEYWORDS, Session, SessionEnd, SessionOptions, SessionSummary, is_exit_keyword};

// --- Rules ------------------------------------------------------------------

/// A compiled rule pattern, searched anywhere in the normalized input.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Compiled once per process through the `regex!` macro in
    /// `src/macros.rs`; used by the built-in tables.
    Static(&'static Regex),

    /// Compiled at run time for custom tables (see [`Rule::new`]).
    Owned(Regex),
}

impl Pattern {
    pub fn regex(&self) -> &Regex {
        match self {
            Pattern::Static(re) => *re,
            Pattern::Owned(re) => re,
        }
    }

    /// The pattern source text.
    pub fn as_str(&self) -> &str {
        self.regex().as_str()
    }

    /// Number of capturing groups (the implicit whole-match group excluded).
    pub fn group_count(&self) -> usize {
        self.regex().captures_len() - 1
    }
}

/// A matching rule: ordered pattern alternatives plus the candidate responses.
///
/// Rules never change once built. Inside a [`RuleTable`] the position of a rule
/// is its priority: the first rule with any matching pattern wins.
#[derive(Debug, Clone)]
pub struct Rule {
    name: Cow<'static, str>,
    patterns: Vec<Pattern>,
    responses: Vec<Template>,
}

impl Rule {
    /// Build a rule from pattern and template sources, validating everything
    /// up front.
    ///
    /// # Errors
    ///
    /// Fails when a pattern does not compile, when there are no patterns or no
    /// responses, or when a template uses a placeholder that some capturing
    /// pattern of the rule cannot fill.
    ///
    /// # Example
    /// ```
    /// use palaver::Rule;
    ///
    /// let rule = Rule::new("order", [r"\border (.+)"], ["One {0}, coming up!"]).unwrap();
    /// assert_eq!(rule.name(), "order");
    /// assert!(Rule::new("broken", [r"(unclosed"], ["?"]).is_err());
    /// ```
    pub fn new<P, PS, R, RS>(name: impl Into<String>, patterns: P, responses: R) -> Result<Self, RuleError>
    where
        P: IntoIterator<Item = PS>,
        PS: AsRef<str>,
        R: IntoIterator<Item = RS>,
        RS: AsRef<str>,
    {
        let name: String = name.into();

        let patterns = patterns
            .into_iter()
            .map(|source| {
                Regex::new(source.as_ref()).map(Pattern::Owned).map_err(|source_err| RuleError::InvalidPattern {
                    rule: name.clone(),
                    pattern: source.as_ref().to_string(),
                    source: source_err,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let responses: Vec<Template> = responses.into_iter().map(|r| Template::parse(r.as_ref())).collect();

        let rule = Rule { name: Cow::Owned(name), patterns, responses };
        rule.validate()?;
        Ok(rule)
    }

    /// Assemble a rule from pre-compiled parts. Used by the `rule!` macro for
    /// the built-in tables, which are checked by their own tests.
    pub(crate) fn from_parts(name: &'static str, patterns: Vec<Pattern>, responses: &[&str]) -> Self {
        Rule { name: Cow::Borrowed(name), patterns, responses: responses.iter().map(|r| Template::parse(r)).collect() }
    }

    /// Check the invariants [`Rule::new`] promises.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.patterns.is_empty() {
            return Err(RuleError::NoPatterns { rule: self.name.to_string() });
        }
        if self.responses.is_empty() {
            return Err(RuleError::NoResponses { rule: self.name.to_string() });
        }

        // Templates are only rendered for patterns with capture groups; patterns
        // without groups hand the template out verbatim.
        for pattern in self.patterns.iter().filter(|p| p.group_count() > 0) {
            for template in &self.responses {
                if let Some(index) = template.max_slot().filter(|i| *i >= pattern.group_count()) {
                    return Err(RuleError::PlaceholderOutOfRange {
                        rule: self.name.to_string(),
                        template: template.as_str().to_string(),
                        pattern: pattern.as_str().to_string(),
                        index,
                        groups: pattern.group_count(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn responses(&self) -> &[Template] {
        &self.responses
    }

    /// Whether `response` is one this rule can produce verbatim (that is,
    /// without placeholder substitution).
    pub fn has_response(&self, response: &str) -> bool {
        self.responses.iter().any(|t| t.as_str() == response)
    }
}
