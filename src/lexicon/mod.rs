//! Linguistic data used by the normalizer.
//!
//! A [`Lexicon`] bundles the stop-word set, the lemma exception table and the
//! list of words that must never be de-pluralized. It is built once, never
//! mutated afterwards, and handed to [`Normalizer::new`](crate::Normalizer::new).
//! Tests and embedders can build their own with [`Lexicon::empty`] and the
//! `with_*` builders instead of relying on process-wide state.

mod english;

use std::collections::{HashMap, HashSet};

/// Immutable linguistic configuration for one [`Normalizer`](crate::Normalizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    lemma_exceptions: HashMap<String, String>,
    invariants: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// The built-in English data: standard stop words plus the noun
    /// exception tables.
    pub fn english() -> Self {
        Self {
            stop_words: english::STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            lemma_exceptions: english::LEMMA_EXCEPTIONS.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect(),
            invariants: english::INVARIANT_NOUNS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// A lexicon without any data: nothing is a stop word and lemmatization
    /// falls back to the suffix rules alone.
    pub fn empty() -> Self {
        Self { stop_words: HashSet::new(), lemma_exceptions: HashMap::new(), invariants: HashSet::new() }
    }

    /// Add stop words. Entries are lower-cased.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Remove stop words, so they survive normalization.
    pub fn without_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.stop_words.remove(&word.as_ref().to_lowercase());
        }
        self
    }

    /// Map an inflected form to its base form, overriding the suffix rules.
    pub fn with_lemma_exception(mut self, inflected: impl AsRef<str>, base: impl AsRef<str>) -> Self {
        self.lemma_exceptions.insert(inflected.as_ref().to_lowercase(), base.as_ref().to_lowercase());
        self
    }

    /// Mark a word as already being its own base form.
    pub fn with_invariant(mut self, word: impl AsRef<str>) -> Self {
        self.invariants.insert(word.as_ref().to_lowercase());
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn lemma_exception(&self, word: &str) -> Option<&str> {
        self.lemma_exceptions.get(word).map(String::as_str)
    }

    pub fn is_invariant(&self, word: &str) -> bool {
        self.invariants.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Iterate over the `(inflected, base)` exception pairs.
    pub fn lemma_exceptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lemma_exceptions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_stop_words_are_loaded() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.stop_word_count(), 179);
        for word in ["the", "is", "a", "you", "me", "about", "how", "what", "don't"] {
            assert!(lexicon.is_stop_word(word), "'{word}' should be a stop word");
        }
        for word in ["hello", "thanks", "tell", "name", "weather", "joke"] {
            assert!(!lexicon.is_stop_word(word), "'{word}' should not be a stop word");
        }
    }

    #[test]
    fn builders_do_not_touch_other_instances() {
        let base = Lexicon::english();
        let custom = base.clone().without_stop_words(["Me", "about"]).with_stop_words(["please"]);

        assert!(base.is_stop_word("me"));
        assert!(!base.is_stop_word("please"));
        assert!(!custom.is_stop_word("me"));
        assert!(!custom.is_stop_word("about"));
        assert!(custom.is_stop_word("please"));
    }

    #[test]
    fn empty_lexicon_has_no_data() {
        let lexicon = Lexicon::empty().with_lemma_exception("Geese", "goose").with_invariant("News");
        assert_eq!(lexicon.stop_word_count(), 0);
        assert_eq!(lexicon.lemma_exception("geese"), Some("goose"));
        assert_eq!(lexicon.lemma_exception("mice"), None);
        assert!(lexicon.is_invariant("news"));
    }
}
