//! Singular "data" check
//!
//! Flags sentences where a normally-plural noun is used with singular
//! agreement, based on part-of-speech tags:
//! 1. the noun itself carries a singular noun tag ("NN", "NNP"), or
//! 2. the noun is present and any singular verb tag ("VBZ") occurs in the
//!    same sentence. The verb need not agree with the noun, so this step
//!    over-reports.

use edittools_config::SingularUsageConfig;
use edittools_core::{PosTagger, TaggedWord, TextRange};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{Result, TextProcessingError};

/// Outcome for one tagged sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingularVerdict {
    /// The target noun occurs in the sentence
    pub has_target: bool,
    /// Singular agreement was detected
    pub singular: bool,
}

impl SingularVerdict {
    /// Sentence should be highlighted
    pub fn is_flagged(&self) -> bool {
        self.has_target && self.singular
    }
}

/// One sentence of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceFlag {
    pub range_index: usize,
    pub sentence_index: usize,
    pub sentence: String,
    pub has_target: bool,
    pub flagged: bool,
}

/// Apply the two-step heuristic to a tagged sentence
pub fn classify_tagged(tagged: &[TaggedWord], config: &SingularUsageConfig) -> SingularVerdict {
    let target = config.target_noun.to_lowercase();
    let mut verdict = SingularVerdict::default();

    for entry in tagged {
        if entry.word.to_lowercase() == target {
            verdict.has_target = true;
            if config.singular_noun_tags.iter().any(|t| *t == entry.tag) {
                verdict.singular = true;
                return verdict;
            }
        }
    }

    if verdict.has_target {
        verdict.singular = tagged
            .iter()
            .any(|entry| config.singular_verb_tags.iter().any(|t| *t == entry.tag));
    }

    verdict
}

/// Runs the heuristic with an injected tagger
pub struct SingularUsageDetector {
    tagger: Arc<dyn PosTagger>,
    config: SingularUsageConfig,
    target: String,
}

impl SingularUsageDetector {
    pub fn new(tagger: Arc<dyn PosTagger>, config: SingularUsageConfig) -> Self {
        let target = config.target_noun.to_lowercase();
        Self {
            tagger,
            config,
            target,
        }
    }

    /// Tag and classify one sentence; tagger failures are returned
    pub fn check_sentence(&self, sentence: &str) -> Result<SingularVerdict> {
        let tagged = self
            .tagger
            .tag(sentence)
            .map_err(|e| TextProcessingError::AnalysisFailed {
                stage: "pos_tagging",
                message: e.to_string(),
            })?;

        if tagged.is_empty() {
            return Err(TextProcessingError::AnalysisFailed {
                stage: "pos_tagging",
                message: format!("{} returned no tokens", self.tagger.name()),
            });
        }

        Ok(classify_tagged(&tagged, &self.config))
    }

    /// Classify every sentence of every range
    ///
    /// Sentences that do not mention the target are not sent to the tagger.
    /// A sentence the tagger cannot handle is reported unflagged.
    pub fn scan(&self, ranges: &[TextRange]) -> Vec<SentenceFlag> {
        let mut flags = Vec::new();

        for (range_index, range) in ranges.iter().enumerate() {
            for (sentence_index, sentence) in range.sentences().enumerate() {
                let trimmed = sentence.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let verdict = if trimmed.to_lowercase().contains(&self.target) {
                    match self.check_sentence(trimmed) {
                        Ok(verdict) => verdict,
                        Err(e) => {
                            tracing::warn!(
                                range_index,
                                sentence_index,
                                error = %e,
                                "Tagging failed; sentence left unflagged"
                            );
                            SingularVerdict::default()
                        }
                    }
                } else {
                    SingularVerdict::default()
                };

                flags.push(SentenceFlag {
                    range_index,
                    sentence_index,
                    sentence: trimmed.to_string(),
                    has_target: verdict.has_target,
                    flagged: verdict.is_flagged(),
                });
            }
        }

        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edittools_core::Error;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedWord> {
        pairs.iter().map(|&(w, t)| TaggedWord::new(w, t)).collect()
    }

    /// Tags from a fixed table, "NN" otherwise; fails on sentences containing "FAIL"
    struct TableTagger;

    impl PosTagger for TableTagger {
        fn tag(&self, sentence: &str) -> edittools_core::Result<Vec<TaggedWord>> {
            if sentence.contains("FAIL") {
                return Err(Error::Tagger("model crashed".to_string()));
            }
            Ok(sentence
                .split_whitespace()
                .map(|w| {
                    let w = w.trim_end_matches('.');
                    let tag = match w.to_lowercase().as_str() {
                        "data" => "NNS",
                        "is" | "shows" => "VBZ",
                        "are" | "show" => "VBP",
                        _ => "NN",
                    };
                    TaggedWord::new(w, tag)
                })
                .collect())
        }

        fn name(&self) -> &str {
            "table"
        }
    }

    struct SilentTagger;

    impl PosTagger for SilentTagger {
        fn tag(&self, _sentence: &str) -> edittools_core::Result<Vec<TaggedWord>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_singular_noun_tag() {
        let config = SingularUsageConfig::default();
        let verdict = classify_tagged(&tagged(&[("Data", "NNP"), ("is", "VBZ")]), &config);
        assert!(verdict.has_target);
        assert!(verdict.is_flagged());
    }

    #[test]
    fn test_plural_without_singular_verb() {
        let config = SingularUsageConfig::default();
        let verdict = classify_tagged(&tagged(&[("Data", "NNS"), ("are", "VBP")]), &config);
        assert!(verdict.has_target);
        assert!(!verdict.is_flagged());
    }

    #[test]
    fn test_singular_verb_fallback() {
        let config = SingularUsageConfig::default();
        let verdict = classify_tagged(&tagged(&[("Data", "NNS"), ("shows", "VBZ")]), &config);
        assert!(verdict.is_flagged());
    }

    #[test]
    fn test_verb_without_target() {
        let config = SingularUsageConfig::default();
        let verdict = classify_tagged(&tagged(&[("It", "PRP"), ("is", "VBZ")]), &config);
        assert!(!verdict.has_target);
        assert!(!verdict.is_flagged());
    }

    #[test]
    fn test_configured_target_and_tags() {
        let config = SingularUsageConfig {
            target_noun: "Media".to_string(),
            singular_verb_tags: vec!["VBZ".to_string(), "VBD-S".to_string()],
            ..Default::default()
        };
        let verdict = classify_tagged(&tagged(&[("media", "NNS"), ("was", "VBD-S")]), &config);
        assert!(verdict.is_flagged());
    }

    #[test]
    fn test_check_sentence_propagates_failure() {
        let detector = SingularUsageDetector::new(Arc::new(TableTagger), Default::default());
        let err = detector.check_sentence("FAIL data").unwrap_err();
        assert!(matches!(
            err,
            TextProcessingError::AnalysisFailed { stage: "pos_tagging", .. }
        ));
        assert!(detector.check_sentence("the data is here").unwrap().is_flagged());
    }

    #[test]
    fn test_scan() {
        let range = TextRange::plain("The data is clear. The data are clear. Nothing here.")
            .with_sentences(vec![0..19, 19..39, 39..52])
            .unwrap();
        let detector = SingularUsageDetector::new(Arc::new(TableTagger), Default::default());
        let flags = detector.scan(&[range]);

        assert_eq!(flags.len(), 3);
        assert!(flags[0].flagged);
        assert_eq!(flags[0].sentence, "The data is clear.");
        assert!(flags[1].has_target);
        assert!(!flags[1].flagged);
        assert!(!flags[2].has_target);
        assert_eq!(flags[2].sentence_index, 2);
    }

    #[test]
    fn test_scan_degrades_on_tagger_failure() {
        let ranges = vec![TextRange::plain("FAIL: the data is wrong")];
        let detector = SingularUsageDetector::new(Arc::new(TableTagger), Default::default());
        let flags = detector.scan(&ranges);
        assert_eq!(flags.len(), 1);
        assert!(!flags[0].flagged);

        let detector = SingularUsageDetector::new(Arc::new(SilentTagger), Default::default());
        let flags = detector.scan(&ranges);
        assert!(!flags[0].flagged);
    }
}
