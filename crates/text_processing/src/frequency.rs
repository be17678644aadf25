//! Word and phrase frequency tables

use edittools_config::PhraseConfig;
use edittools_core::TextRange;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::normalizer::{
    collapse_spaces, is_all_digits, remove_numbers, strip_punctuation, to_words, tokens,
};
use crate::{Result, TextProcessingError};

/// Occurrence counts keyed by word or phrase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one observation
    pub fn record(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Entries by count descending, ties in ascending key order
    pub fn sorted(&self) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .counts
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Entries seen more than once, sorted like [`FrequencyTable::sorted`]
    pub fn repeated(&self) -> Vec<(String, u32)> {
        self.sorted().into_iter().filter(|(_, c)| *c > 1).collect()
    }
}

/// Case-sensitive word counts over every range
///
/// Punctuation is stripped first; digit-only tokens are not counted.
pub fn word_frequencies(ranges: &[TextRange]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for range in ranges {
        let text = strip_punctuation(range.text());
        for word in tokens(&text) {
            if !is_all_digits(word) {
                table.record(word);
            }
        }
    }
    table
}

/// Distinct words of the document in ordinal order, numbers removed
pub fn word_list(ranges: &[TextRange]) -> BTreeSet<String> {
    let mut words = BTreeSet::new();
    for range in ranges {
        words.extend(to_words(&strip_punctuation(range.text())));
    }
    remove_numbers(words)
}

/// Lowercased n-gram counts over every sentence of every range
///
/// Phrases never cross sentence boundaries. Fails without building a table
/// when the length bounds are invalid.
pub fn phrase_frequencies(ranges: &[TextRange], config: &PhraseConfig) -> Result<FrequencyTable> {
    if !config.is_valid() {
        return Err(TextProcessingError::InvalidPhraseLength {
            min: config.min_length,
            max: config.max_length,
        });
    }

    let mut table = FrequencyTable::new();
    for range in ranges {
        for sentence in range.sentences() {
            let cleaned = collapse_spaces(&strip_punctuation(sentence));
            let words: Vec<&str> = tokens(&cleaned).collect();
            count_windows(&words, config, &mut table);
        }
    }
    Ok(table)
}

fn count_windows(words: &[&str], config: &PhraseConfig, table: &mut FrequencyTable) {
    for len in config.min_length..=config.max_length {
        if len > words.len() {
            break;
        }
        for window in words.windows(len) {
            table.record(window.join(" ").to_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_frequencies() {
        let table = word_frequencies(&[TextRange::plain("The cat sat. The dog sat.")]);
        assert_eq!(table.get("The"), Some(2));
        assert_eq!(table.get("sat"), Some(2));
        assert_eq!(table.get("cat"), Some(1));
        assert_eq!(table.get("dog"), Some(1));
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_word_frequencies_case_sensitive() {
        let table = word_frequencies(&[TextRange::plain("Data data DATA data")]);
        assert_eq!(table.get("data"), Some(2));
        assert_eq!(table.get("Data"), Some(1));
        assert_eq!(table.get("DATA"), Some(1));
    }

    #[test]
    fn test_word_frequencies_skip_numbers() {
        let table = word_frequencies(&[TextRange::plain("In 2019, 42 people met 3x.")]);
        assert_eq!(table.get("2019"), None);
        assert_eq!(table.get("42"), None);
        assert_eq!(table.get("3x"), Some(1));
    }

    #[test]
    fn test_word_frequencies_across_ranges() {
        let ranges = vec![TextRange::plain("Alpha beta."), TextRange::new("Alpha!", "Heading 1")];
        let table = word_frequencies(&ranges);
        assert_eq!(table.get("Alpha"), Some(2));
    }

    #[test]
    fn test_sorted_ties_are_alphabetical() {
        let table = word_frequencies(&[TextRange::plain("b a c a b d")]);
        let sorted = table.sorted();
        assert_eq!(
            sorted,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 2),
                ("c".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(word_frequencies(&[]).is_empty());
        assert!(word_frequencies(&[TextRange::plain("  ... ")]).is_empty());
        assert!(word_list(&[]).is_empty());
    }

    #[test]
    fn test_word_list() {
        let words = word_list(&[TextRange::plain("Zebra, apple; 12 apple Apple.")]);
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["Apple", "Zebra", "apple"]);
    }

    #[test]
    fn test_phrase_frequencies() {
        let ranges = vec![TextRange::plain("the quick brown fox the quick")];
        let table = phrase_frequencies(&ranges, &PhraseConfig::new(2, 2)).unwrap();
        assert_eq!(table.get("the quick"), Some(2));
        assert_eq!(table.get("quick brown"), Some(1));
        assert_eq!(table.get("brown fox"), Some(1));
        assert_eq!(table.get("fox the"), Some(1));
        assert_eq!(table.repeated(), vec![("the quick".to_string(), 2)]);
    }

    #[test]
    fn test_phrase_frequencies_lowercased_and_stripped() {
        let ranges = vec![TextRange::plain("The  Quick, brown fox -- the quick!")];
        let table = phrase_frequencies(&ranges, &PhraseConfig::new(2, 3)).unwrap();
        assert_eq!(table.get("the quick"), Some(2));
        assert_eq!(table.get("the quick brown"), Some(1));
        assert_eq!(table.get("brown fox the"), Some(1));
    }

    #[test]
    fn test_phrases_stay_inside_sentences() {
        let range = TextRange::plain("red fish. blue fish.")
            .with_sentences(vec![0..10, 10..20])
            .unwrap();
        let table = phrase_frequencies(&[range], &PhraseConfig::new(2, 2)).unwrap();
        assert_eq!(table.get("red fish"), Some(1));
        assert_eq!(table.get("blue fish"), Some(1));
        assert_eq!(table.get("fish blue"), None);
    }

    #[test]
    fn test_window_longer_than_sentence() {
        let table =
            phrase_frequencies(&[TextRange::plain("too short")], &PhraseConfig::new(3, 5)).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_phrase_bounds() {
        let ranges = vec![TextRange::plain("the quick brown fox")];
        let err = phrase_frequencies(&ranges, &PhraseConfig::new(3, 2)).unwrap_err();
        assert!(matches!(
            err,
            TextProcessingError::InvalidPhraseLength { min: 3, max: 2 }
        ));
        assert!(phrase_frequencies(&ranges, &PhraseConfig::new(0, 2)).is_err());
    }
}
