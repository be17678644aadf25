//! Text normalization
//!
//! Punctuation stripping, whitespace tokenization, and numeric-token
//! filtering shared by the word list, frequency, and proper noun passes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Unicode punctuation other than the straight and typographic apostrophes
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{P}&&[^'\x{2019}]]").expect("valid punctuation pattern"));

static ALL_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid digits pattern"));

/// Remove punctuation, keeping apostrophes so contractions survive
///
/// Characters are removed rather than replaced, so "well-known" becomes
/// "wellknown". Whitespace is left untouched.
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "").into_owned()
}

/// Collapse every run of whitespace into a single space and trim the ends
pub fn collapse_spaces(text: &str) -> String {
    tokens(text).collect::<Vec<_>>().join(" ")
}

/// Whitespace-separated tokens; empty tokens are never produced
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Distinct whitespace-separated words
pub fn to_words(text: &str) -> BTreeSet<String> {
    tokens(text).map(str::to_string).collect()
}

/// Token made of digits only
pub fn is_all_digits(token: &str) -> bool {
    ALL_DIGITS.is_match(token)
}

/// Drop tokens made of digits only
pub fn remove_numbers(words: BTreeSet<String>) -> BTreeSet<String> {
    words.into_iter().filter(|w| !is_all_digits(w)).collect()
}
