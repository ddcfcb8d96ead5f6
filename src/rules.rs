//! Rule tables.
//!
//! A [`RuleTable`] is an ordered list of [`Rule`]s; order is priority. The
//! built-in conversation table lives in [`smalltalk`].

pub mod smalltalk;


use crate::{Rule, RuleError};
use std::collections::HashSet;

pub use smalltalk::FAREWELLS;

/// Returned when no rule matches the normalized input.
pub const FALLBACK_RESPONSE: &str = "I'm not sure how to respond to that. Can you rephrase or ask something else?";

/// An ordered, immutable collection of rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl Default for RuleTable {
    /// The built-in [`smalltalk`] table.
    fn default() -> Self {
        Self { rules: smalltalk::get() }
    }
}

impl RuleTable {
    /// Build a table, keeping `rules` in the given order.
    ///
    /// # Errors
    ///
    /// Rejects an empty table, duplicate rule names, and rules failing
    /// [`Rule::validate`].
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::EmptyTable);
        }

        let mut seen = HashSet::new();
        for rule in &rules {
            rule.validate()?;
            if !seen.insert(rule.name()) {
                return Err(RuleError::DuplicateRule { rule: rule.name().to_string() });
            }
        }

        Ok(Self { rules })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look a rule up by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Rule names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
