use crate::engine::{self, Match, Normalizer};
use crate::rules::{FALLBACK_RESPONSE, RuleTable};
use crate::{Result, Rule};
use once_cell::sync::Lazy;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;

static DEFAULT_RESPONDER: Lazy<Responder> = Lazy::new(Responder::default);

/// Normalizer plus rule table: everything needed to answer an input.
///
/// A `Responder` is immutable once built and can be shared freely; the only
/// per-call state is the random source used to pick a response.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    normalizer: Normalizer,
    rules: RuleTable,
}

/// Which rule answered, in a form that outlives the [`Responder`] borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub rule: String,
    pub rule_index: usize,
    pub pattern_index: usize,
    /// Source of the pattern that matched.
    pub pattern: String,
    /// Captured text for groups 1.., empty for groups that did not participate.
    pub captures: Vec<String>,
}

/// Result of [`Responder::reply_with`]: the response plus how it was reached.
#[derive(Debug, Clone)]
pub struct Reply {
    /// The raw input text.
    pub text: String,
    /// The input after normalization.
    pub normalized: String,
    pub response: String,
    /// `None` when the fallback response was used.
    pub matched: Option<MatchSummary>,
    /// Time spent normalizing, matching and rendering.
    pub elapsed: Duration,
}

impl Reply {
    pub fn is_fallback(&self) -> bool {
        self.matched.is_none()
    }
}

impl Responder {
    pub fn new(normalizer: Normalizer, rules: RuleTable) -> Self {
        Self { normalizer, rules }
    }

    /// English normalizer over a custom rule table.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Rule`](crate::Error::Rule) when the table is
    /// rejected by [`RuleTable::new`].
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        Ok(Self::new(Normalizer::default(), RuleTable::new(rules)?))
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Scan the rule table against already-normalized text.
    pub fn find_match(&self, normalized: &str) -> Option<Match<'_>> {
        engine::find_match(&self.rules, normalized)
    }

    /// Answer `text`, picking responses with the thread-local RNG.
    pub fn respond(&self, text: &str) -> String {
        self.respond_with(text, &mut rand::thread_rng())
    }

    /// Answer `text`, picking responses with `rng`.
    ///
    /// Use this when you want deterministic output by supplying a seeded or
    /// mock random source.
    pub fn respond_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        self.reply_with(text, rng).response
    }

    /// Answer `text` and report the normalized form, the matching rule and timing.
    pub fn reply_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Reply {
        let start = Instant::now();
        let normalized = self.normalizer.normalize(text);

        let (response, matched) = match self.find_match(&normalized) {
            Some(m) => match m.choose_response(rng) {
                Some(response) => (response, Some(summarize(&m))),
                None => (FALLBACK_RESPONSE.to_string(), None),
            },
            None => (FALLBACK_RESPONSE.to_string(), None),
        };

        debug!(
            normalized = normalized.as_str(),
            rule = matched.as_ref().map_or("fallback", |m| m.rule.as_str()),
            "reply"
        );

        Reply { text: text.to_string(), normalized, response, matched, elapsed: start.elapsed() }
    }
}

fn summarize(m: &Match<'_>) -> MatchSummary {
    MatchSummary {
        rule: m.rule.name().to_string(),
        rule_index: m.rule_index,
        pattern_index: m.pattern_index,
        pattern: m.pattern().as_str().to_string(),
        captures: m.groups.iter().map(|g| g.clone().unwrap_or_default()).collect(),
    }
}

/// Answer `text` with the built-in rules and English lexicon.
///
/// # Example
/// ```
/// use palaver::{FALLBACK_RESPONSE, respond};
///
/// assert_eq!(respond("xyzzy"), FALLBACK_RESPONSE);
/// assert!(respond("Tell me about pizza").contains("pizza"));
/// ```
pub fn respond(text: &str) -> String {
    DEFAULT_RESPONDER.respond(text)
}

/// Like [`respond`], with an explicit random source.
pub fn respond_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    DEFAULT_RESPONDER.respond_with(text, rng)
}

/// Like [`respond`], returning the full [`Reply`].
pub fn reply_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Reply {
    DEFAULT_RESPONDER.reply_with(text, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Lexicon, RuleError};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn case_does_not_matter() {
        let responder = Responder::default();
        for input in ["HELLO", "hello", "HeLLo"] {
            let m = responder.find_match(&responder.normalizer().normalize(input));
            assert_eq!(m.map(|m| m.rule.name()), Some("greeting"), "'{}' should greet", input);
        }
    }

    #[test]
    fn reply_reports_the_match() {
        let reply = reply_with("Tell me about pizza!", &mut StepRng::new(0, 0));
        assert_eq!(reply.normalized, "tell pizza");
        assert_eq!(reply.response, "I can try to tell you about pizza.");
        assert!(!reply.is_fallback());

        let matched = reply.matched.expect("topic should match");
        assert_eq!(matched.rule, "topic");
        assert_eq!(matched.rule_index, 10);
        assert_eq!(matched.pattern_index, 0);
        assert_eq!(matched.pattern, r"\btell (.+)");
        assert_eq!(matched.captures, vec!["pizza".to_string()]);
    }

    #[test]
    fn reply_reports_the_fallback() {
        let reply = reply_with("", &mut StepRng::new(0, 0));
        assert_eq!(reply.normalized, "");
        assert_eq!(reply.response, FALLBACK_RESPONSE);
        assert!(reply.is_fallback());
    }

    #[test]
    fn fixed_random_source_is_deterministic() {
        let responder = Responder::default();
        let first = responder.respond_with("hello", &mut StepRng::new(0, 0));
        assert_eq!(first, "Hello! How can I help you today?");

        let a: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10).map(|_| responder.respond_with("joke", &mut rng)).collect()
        };
        let b: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10).map(|_| responder.respond_with("joke", &mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn default_entry_point_uses_builtin_rules() {
        assert_eq!(respond("qwerty asdf"), FALLBACK_RESPONSE);
        assert!(crate::FAREWELLS.contains(&respond("bye").as_str()));
    }

    #[test]
    fn responders_are_independent() {
        let echo = Rule::new("echo", [r"(.+)"], ["you said {0}"]).unwrap();
        let custom = Responder::new(Normalizer::new(Lexicon::empty()), RuleTable::new(vec![echo]).unwrap());
        assert_eq!(custom.respond_with("The Cats", &mut StepRng::new(0, 0)), "you said the cat");
        assert_eq!(Responder::default().respond_with("The Cats", &mut StepRng::new(0, 0)), FALLBACK_RESPONSE);
    }

    #[test]
    fn from_rules_reports_table_errors() {
        assert!(matches!(Responder::from_rules(Vec::new()), Err(Error::Rule(RuleError::EmptyTable))));

        let twice = vec![
            Rule::new("same", [r"\bcat\b"], ["meow"]).unwrap(),
            Rule::new("same", [r"\bdog\b"], ["woof"]).unwrap(),
        ];
        let err = Responder::from_rules(twice).unwrap_err();
        assert!(matches!(&err, Error::Rule(RuleError::DuplicateRule { rule }) if rule == "same"));
        assert_eq!(err.to_string(), "duplicate rule name 'same'");

        let responder = Responder::from_rules(vec![Rule::new("cat", [r"\bcat\b"], ["meow"]).unwrap()]).unwrap();
        assert_eq!(responder.respond_with("Cats!", &mut StepRng::new(0, 0)), "meow");
    }

    #[test]
    fn plural_topics_are_singularized_cleanly() {
        let responder = Responder::default();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..30 {
            let reply = responder.reply_with("Tell me about heroes", &mut rng);
            assert_eq!(reply.normalized, "tell hero");
            assert!(reply.response.contains("hero"), "unexpected response '{}'", reply.response);
            assert!(!reply.response.contains("heroe"), "unexpected response '{}'", reply.response);
        }
        assert_eq!(responder.normalizer().normalize("my shoes and menus"), "shoe menu");
    }

    const VOCAB: &[&str] = &[
        "Hello", "hi", "THE", "is", "a", "you", "me", "about", "tell", "Tell", "pizza", "pizzas", "Wolves",
        "children", "mice", "cities", "boxes", "churches", "glasses", "Greetings", "thanks", "don't", "it's",
        "can't", "42", "well-known", "weather", "jokes", "times", "colors", "names", "running", "café", ",", "!",
        "?", "...", "news", "class", "virus",
    ];

    fn sentence() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(VOCAB), 0..12).prop_map(|words| words.join(" "))
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(raw in sentence()) {
            let normalizer = Normalizer::default();
            let once = normalizer.normalize(&raw);
            prop_assert_eq!(normalizer.normalize(&once), once);
        }

        #[test]
        fn normalized_tokens_are_alphabetic(raw in "\\PC{0,64}") {
            let normalizer = Normalizer::default();
            for token in normalizer.tokens(&raw) {
                prop_assert!(!token.is_empty());
                prop_assert!(token.chars().all(char::is_alphabetic), "token '{}' from '{}'", token, raw);
            }
        }

        #[test]
        fn responses_come_from_the_table(raw in sentence(), seed in any::<u64>()) {
            let responder = Responder::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let reply = responder.reply_with(&raw, &mut rng);
            match &reply.matched {
                None => prop_assert_eq!(reply.response.as_str(), FALLBACK_RESPONSE),
                Some(m) => {
                    let rule = responder.rules().get(&m.rule).expect("matched rule exists");
                    if m.captures.is_empty() {
                        prop_assert!(rule.has_response(&reply.response));
                    } else {
                        let rendered: Vec<String> =
                            rule.responses().iter().map(|t| t.render(&[Some(m.captures[0].as_str())])).collect();
                        prop_assert!(rendered.contains(&reply.response));
                    }
                }
            }
        }
    }
}
