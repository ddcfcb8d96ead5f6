//! First-match rule scanning and response selection.
//!
//! Rules are scanned in table order and, inside a rule, patterns in listed
//! order. Each pattern is an unanchored search over the normalized input; the
//! very first hit decides the rule and scanning stops there. Specificity plays
//! no part, so the order in which a table is authored is part of its meaning.

use crate::{Pattern, Rule, RuleTable};
use rand::Rng;
use rand::seq::SliceRandom;

/// A successful scan: which rule and pattern matched, and what they captured.
#[derive(Debug, Clone)]
pub struct Match<'r> {
    /// Position of the rule in its table.
    pub rule_index: usize,
    pub rule: &'r Rule,
    /// Position of the matching pattern inside the rule.
    pub pattern_index: usize,
    /// Capture groups 1.., `None` for groups that did not participate.
    pub groups: Vec<Option<String>>,
}

impl<'r> Match<'r> {
    pub fn pattern(&self) -> &'r Pattern {
        &self.rule.patterns()[self.pattern_index]
    }

    /// Whether the matching pattern has capturing groups (and therefore
    /// templates get placeholder substitution).
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Pick one of the rule's templates uniformly at random and render it.
    ///
    /// Returns `None` only for a rule without responses, which
    /// [`Rule::validate`] rejects.
    pub fn choose_response<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let template = self.rule.responses().choose(rng)?;
        if self.has_groups() { Some(template.render(&self.groups)) } else { Some(template.as_str().to_string()) }
    }
}

/// Scan `rules` against `normalized` and return the first match.
pub fn find_match<'r>(rules: &'r RuleTable, normalized: &str) -> Option<Match<'r>> {
    for (rule_index, rule) in rules.iter().enumerate() {
        for (pattern_index, pattern) in rule.patterns().iter().enumerate() {
            let Some(caps) = pattern.regex().captures(normalized) else {
                continue;
            };

            let groups = caps.iter().skip(1).map(|m| m.map(|m| m.as_str().to_string())).collect();
            return Some(Match { rule_index, rule, pattern_index, groups });
        }
    }
    None
}
