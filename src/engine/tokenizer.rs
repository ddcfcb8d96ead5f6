//! Word tokenization.
//!
//! Word boundaries follow the Unicode word classes (`\w`), so letters from any
//! script, digits and connector punctuation form words while whitespace and
//! other punctuation only separate them. Internal hyphens and apostrophes keep
//! a word whole, after which English clitics are split off the way the Penn
//! Treebank tokenizer does it (`don't` -> `do` + `n't`, `it's` -> `it` + `'s`).
//!
//! The tokenizer does not filter anything: `n't`, `42` and `well-known` are all
//! returned as tokens. Filtering is the normalizer's job.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fused words that the Treebank tokenizer splits in two.
static FUSED: Lazy<HashMap<&'static str, [&'static str; 2]>> = Lazy::new(|| {
    HashMap::from([
        ("cannot", ["can", "not"]),
        ("gimme", ["gim", "me"]),
        ("gonna", ["gon", "na"]),
        ("gotta", ["got", "ta"]),
        ("lemme", ["lem", "me"]),
        ("wanna", ["wan", "na"]),
    ])
});

/// Split `text` into word tokens, in order.
///
/// `text` is expected to be lower-cased already; clitic detection only looks
/// at lower-case forms.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for word in regex!(r"\w+(?:[-'’]\w+)*").find_iter(text) {
        split_clitics(word.as_str(), &mut out);
    }
    out
}

fn split_clitics<'a>(word: &'a str, out: &mut Vec<&'a str>) {
    if let Some(parts) = FUSED.get(word) {
        // Both halves are slices of `word`, so the output keeps borrowing the input.
        let (head, tail) = word.split_at(parts[0].len());
        out.push(head);
        out.push(tail);
        return;
    }

    for negation in ["n't", "n’t"] {
        if let Some(base) = word.strip_suffix(negation) {
            if !base.is_empty() {
                out.push(base);
                out.push(&word[base.len()..]);
                return;
            }
        }
    }

    match word.find(['\'', '’']) {
        Some(pos) if pos > 0 => {
            out.push(&word[..pos]);
            out.push(&word[pos..]);
        }
        _ => out.push(word),
    }
}
