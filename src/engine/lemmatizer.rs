//! Noun-default lemmatization.
//!
//! Every word is treated as a noun, which is what a part-of-speech-agnostic
//! lemmatizer does by default: plural forms are reduced to the singular and
//! everything else (verbs in `-ing`, adjectives, ...) is left untouched.
//!
//! Lookup order:
//!
//! 1. the lexicon's exception table (`children` -> `child`);
//! 2. invariant words and words of three letters or fewer stay as they are;
//! 3. the first applicable suffix detachment from [`NOUN_DETACHMENTS`].
//!
//! Every output of the detachment rules is a fixed point of the rules
//! themselves, which keeps normalization idempotent for in-vocabulary text.

use crate::Lexicon;
use std::borrow::Cow;

/// `(suffix, replacement)` pairs, tried in order; the first one that applies wins.
const NOUN_DETACHMENTS: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("zzes", "zz"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("oes", "o"),
    ("ies", "y"),
    ("s", ""),
];

/// Endings that look plural but belong to the singular (`class`, `virus`, `basis`).
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Borrowing view over a [`Lexicon`] that reduces words to their base form.
#[derive(Debug, Clone, Copy)]
pub struct Lemmatizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Lemmatizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Reduce a lower-case `word` to its noun base form.
    pub fn lemmatize<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if let Some(base) = self.lexicon.lemma_exception(word) {
            return Cow::Owned(base.to_string());
        }

        let len = word.chars().count();
        if len <= 3 || self.lexicon.is_invariant(word) {
            return Cow::Borrowed(word);
        }

        for (suffix, replacement) in NOUN_DETACHMENTS {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };

            match *suffix {
                "ies" if len <= 4 => continue,
                "s" if SINGULAR_ENDINGS.iter().any(|end| word.ends_with(end)) => return Cow::Borrowed(word),
                _ => {}
            }

            if replacement.is_empty() {
                return Cow::Borrowed(stem);
            }
            return Cow::Owned(format!("{stem}{replacement}"));
        }

        Cow::Borrowed(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lemmatize_examples() {
        let lexicon = Lexicon::english();
        let lemmatizer = Lemmatizer::new(&lexicon);

        // (input, expected)
        let cases = [
            ("greetings", "greeting"),
            ("jokes", "joke"),
            ("colors", "color"),
            ("cities", "city"),
            ("babies", "baby"),
            ("ties", "tie"),
            ("pies", "pie"),
            ("boxes", "box"),
            ("churches", "church"),
            ("dishes", "dish"),
            ("glasses", "glass"),
            ("buzzes", "buzz"),
            ("children", "child"),
            ("mice", "mouse"),
            ("wolves", "wolf"),
            ("movies", "movie"),
            ("analyses", "analysis"),
            ("heroes", "hero"),
            ("potatoes", "potato"),
            ("goes", "go"),
            ("shoes", "shoe"),
            ("toes", "toe"),
            ("canoes", "canoe"),
            ("menus", "menu"),
            ("gurus", "guru"),
            ("emus", "emu"),
            // left alone
            ("class", "class"),
            ("virus", "virus"),
            ("basis", "basis"),
            ("news", "news"),
            ("thanks", "thanks"),
            ("always", "always"),
            ("gas", "gas"),
            ("yes", "yes"),
            ("running", "running"),
            ("pizza", "pizza"),
            ("weather", "weather"),
        ];

        for (input, expected) in cases {
            assert_eq!(lemmatizer.lemmatize(input), expected, "unexpected lemma for '{}'", input);
        }
    }

    #[test]
    fn lemmas_are_fixed_points() {
        let lexicon = Lexicon::english();
        let lemmatizer = Lemmatizer::new(&lexicon);

        for (inflected, base) in lexicon.lemma_exceptions() {
            assert_eq!(lemmatizer.lemmatize(base), base, "base form of '{}' is not stable", inflected);
        }

        for word in ["glasses", "cities", "churches", "boxes", "greetings", "buzzes", "quizzes"] {
            let once = lemmatizer.lemmatize(word).into_owned();
            assert_eq!(lemmatizer.lemmatize(&once), once, "lemma of '{}' is not stable", word);
        }
    }

    #[test]
    fn non_ascii_words_are_safe() {
        let lexicon = Lexicon::empty();
        let lemmatizer = Lemmatizer::new(&lexicon);
        assert_eq!(lemmatizer.lemmatize("cafés"), "café");
        assert_eq!(lemmatizer.lemmatize("añós"), "añó");
        assert_eq!(lemmatizer.lemmatize("ñs"), "ñs");
    }
}
