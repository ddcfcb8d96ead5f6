//! Normalization and matching engine.
//!
//! Answering one input is a straight pipeline:
//!
//! ```text
//! raw input
//!     │  Normalizer::normalize            (normalizer.rs)
//!     │    - lowercase
//!     │    - tokenize                      (tokenizer.rs)
//!     │    - keep alphabetic, drop stop words
//!     │    - lemmatize                     (lemmatizer.rs)
//!     v
//! normalized string
//!     │  find_match                        (matcher.rs)
//!     │    - rules in table order, patterns in listed order
//!     │    - first unanchored regex hit wins
//!     v
//! Option<Match>
//!     │  Match::choose_response            (matcher.rs, template.rs)
//!     │    - uniform random template
//!     │    - capture substitution into {0}, {1}, ...
//!     v
//! response (or the fallback message when nothing matched)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tokenizer.rs`: Unicode word tokens with Treebank-style clitic splitting.
//! - `lemmatizer.rs`: noun-default base forms driven by the [`Lexicon`](crate::Lexicon).
//! - `normalizer.rs`: the ordered normalization steps.
//! - `template.rs`: response templates and placeholder rendering.
//! - `matcher.rs`: the linear first-match scan and response choice.
//!
//! Nothing in here holds mutable state; everything is safe to share between
//! threads once built.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=palaver=trace` to see normalization and match traces.

#[path = "engine/lemmatizer.rs"]
mod lemmatizer;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/normalizer.rs"]
mod normalizer;
#[path = "engine/template.rs"]
mod template;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

pub use lemmatizer::Lemmatizer;
pub use matcher::{Match, find_match};
pub use normalizer::Normalizer;
pub use template::Template;
