//! Input normalization.
//!
//! ```text
//! raw ── lowercase ── tokenize ── keep alphabetic ── drop stop words ── lemmatize ── join(" ")
//! ```
//!
//! Each step runs in exactly this order. Stop words are checked on the surface
//! form, before lemmatization.

use super::lemmatizer::Lemmatizer;
use super::tokenizer::tokenize;
use crate::Lexicon;
use tracing::trace;

/// Turns raw user text into the normalized string rules are matched against.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    lexicon: Lexicon,
}

impl Normalizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn lemmatizer(&self) -> Lemmatizer<'_> {
        Lemmatizer::new(&self.lexicon)
    }

    /// Normalized tokens of `raw`, in input order.
    pub fn tokens(&self, raw: &str) -> Vec<String> {
        let lowered = raw.to_lowercase();
        let lemmatizer = self.lemmatizer();

        let tokens: Vec<String> = tokenize(&lowered)
            .into_iter()
            .filter(|token| token.chars().all(char::is_alphabetic))
            .filter(|token| !self.lexicon.is_stop_word(token))
            .map(|token| lemmatizer.lemmatize(token).into_owned())
            .collect();

        trace!(input = raw, ?tokens, "normalized");
        tokens
    }

    /// Normalize `raw` into a single space-joined string. Empty input (or input
    /// made only of stop words and punctuation) yields an empty string.
    pub fn normalize(&self, raw: &str) -> String {
        self.tokens(raw).join(" ")
    }
}
