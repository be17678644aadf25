//! Proper noun checker
//!
//! Collects capitalized words from body text and groups them by sound and by
//! spelling so near-duplicate names ("Stanford" / "Stanfrd") stand out.
//! Words in all caps (acronyms) are not included.

use edittools_config::ProperNounConfig;
use edittools_core::TextRange;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::normalizer::{strip_punctuation, tokens};
use crate::similarity::{group_by_distance, group_by_phonetics};
use crate::{Result, TextProcessingError};

/// Result of a proper noun check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProperNounReport {
    /// Capped candidates that went into grouping
    pub candidates: BTreeSet<String>,
    /// Phonetic key -> words sharing it (two or more)
    pub phonetic_groups: BTreeMap<u16, Vec<String>>,
    /// Anchor -> words within the distance threshold
    pub distance_groups: BTreeMap<String, Vec<String>>,
    /// Threshold the distance groups were built with
    pub distance_threshold: usize,
}

/// Extracts and groups proper noun candidates
pub struct ProperNounClassifier {
    excluded_styles: Regex,
    config: ProperNounConfig,
}

impl ProperNounClassifier {
    /// Compile the excluded-style pattern (matched case-insensitively)
    pub fn new(config: &ProperNounConfig) -> Result<Self> {
        let excluded_styles = RegexBuilder::new(&config.excluded_styles)
            .case_insensitive(true)
            .build()
            .map_err(|e| TextProcessingError::InvalidPattern {
                pattern: config.excluded_styles.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            excluded_styles,
            config: config.clone(),
        })
    }

    /// Whether a range with this style contributes candidates
    pub fn is_excluded_style(&self, style: &str) -> bool {
        self.excluded_styles.is_match(style)
    }

    /// Distinct words starting with an uppercase letter, headings skipped
    pub fn extract_candidates(&self, ranges: &[TextRange]) -> BTreeSet<String> {
        let mut candidates = BTreeSet::new();

        for range in ranges {
            if self.is_excluded_style(range.style()) {
                tracing::trace!(style = range.style(), "Skipping range");
                continue;
            }

            if self.config.skip_sentence_initial {
                for sentence in range.sentences() {
                    let cleaned = strip_punctuation(sentence);
                    candidates.extend(
                        tokens(&cleaned)
                            .skip(1)
                            .filter(|w| starts_uppercase(w))
                            .map(str::to_string),
                    );
                }
            } else {
                let cleaned = strip_punctuation(range.text());
                candidates.extend(
                    tokens(&cleaned)
                        .filter(|w| starts_uppercase(w))
                        .map(str::to_string),
                );
            }
        }

        candidates
    }

    /// Extract candidates, drop acronyms, and build both groupings
    pub fn classify(&self, ranges: &[TextRange]) -> ProperNounReport {
        let candidates = keep_caps(&self.extract_candidates(ranges));
        let threshold = self.config.distance_threshold;

        let phonetic_groups = group_by_phonetics(&candidates);
        let distance_groups = group_by_distance(
            &candidates,
            self.config.effective_min_word_length(),
            threshold,
        );

        tracing::debug!(
            candidates = candidates.len(),
            phonetic_groups = phonetic_groups.len(),
            distance_groups = distance_groups.len(),
            "Grouped proper noun candidates"
        );

        ProperNounReport {
            candidates,
            phonetic_groups,
            distance_groups,
            distance_threshold: threshold,
        }
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Proper-noun-like: starts uppercase and has at least one lowercase letter
///
/// "Stanford", "McDonald" and "O'Brien" qualify; "NASA", "I" and "USB3" do not.
pub fn is_capped(word: &str) -> bool {
    starts_uppercase(word) && word.chars().any(char::is_lowercase)
}

/// Keep only capped words
pub fn keep_caps(words: &BTreeSet<String>) -> BTreeSet<String> {
    words.iter().filter(|w| is_capped(w)).cloned().collect()
}
