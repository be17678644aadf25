//! Analysis settings passed into each text-analysis operation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{phrases, proper_nouns, singular_usage};
use crate::ConfigError;

/// All analysis settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub phrases: PhraseConfig,

    #[serde(default)]
    pub proper_nouns: ProperNounConfig,

    #[serde(default)]
    pub singular_usage: SingularUsageConfig,

    #[serde(default)]
    pub comments: CommentsConfig,
}

impl AnalysisConfig {
    /// Validate everything that can be rejected up front
    ///
    /// Phrase bounds are deliberately not rejected here: the phrase operation
    /// reports them as a validation failure when it runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.phrases.is_valid() {
            tracing::warn!(
                min_length = self.phrases.min_length,
                max_length = self.phrases.max_length,
                "Phrase length bounds are invalid; phrase lists will be skipped"
            );
        }
        self.proper_nouns.validate()?;
        self.singular_usage.validate()?;
        self.comments.validate()?;
        Ok(())
    }
}

/// Phrase frequency settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseConfig {
    /// Shortest phrase, in words
    #[serde(default = "default_phrase_min")]
    pub min_length: usize,

    /// Longest phrase, in words
    #[serde(default = "default_phrase_max")]
    pub max_length: usize,
}

fn default_phrase_min() -> usize {
    phrases::MIN_LENGTH
}

fn default_phrase_max() -> usize {
    phrases::MAX_LENGTH
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            min_length: phrases::MIN_LENGTH,
            max_length: phrases::MAX_LENGTH,
        }
    }
}

impl PhraseConfig {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Both bounds positive and min <= max
    pub fn is_valid(&self) -> bool {
        self.min_length > 0 && self.max_length > 0 && self.min_length <= self.max_length
    }
}

/// Proper noun checker settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProperNounConfig {
    /// Names within this edit distance are grouped
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: usize,

    /// Words this short or shorter are left out of distance grouping.
    /// Falls back to `distance_threshold` when unset.
    #[serde(default)]
    pub min_word_length: Option<usize>,

    /// Ranges whose style name matches this pattern are skipped
    #[serde(default = "default_excluded_styles")]
    pub excluded_styles: String,

    /// Ignore the first word of every sentence
    #[serde(default)]
    pub skip_sentence_initial: bool,
}

fn default_distance_threshold() -> usize {
    proper_nouns::DISTANCE_THRESHOLD
}

fn default_excluded_styles() -> String {
    proper_nouns::EXCLUDED_STYLES.to_string()
}

impl Default for ProperNounConfig {
    fn default() -> Self {
        Self {
            distance_threshold: default_distance_threshold(),
            min_word_length: None,
            excluded_styles: default_excluded_styles(),
            skip_sentence_initial: false,
        }
    }
}

impl ProperNounConfig {
    /// Minimum word length actually used for distance grouping
    pub fn effective_min_word_length(&self) -> usize {
        self.min_word_length.unwrap_or(self.distance_threshold)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.distance_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.proper_nouns.distance_threshold".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if let Err(e) = Regex::new(&self.excluded_styles) {
            return Err(ConfigError::InvalidValue {
                field: "analysis.proper_nouns.excluded_styles".to_string(),
                message: format!("Not a valid pattern: {}", e),
            });
        }

        Ok(())
    }
}

/// Singular-usage heuristic settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingularUsageConfig {
    /// Normally-plural noun to watch for (compared lowercased)
    #[serde(default = "default_target_noun")]
    pub target_noun: String,

    /// Tags that mark the target noun itself as singular
    #[serde(default = "default_noun_tags")]
    pub singular_noun_tags: Vec<String>,

    /// Verb tags that imply singular agreement somewhere in the sentence
    #[serde(default = "default_verb_tags")]
    pub singular_verb_tags: Vec<String>,

    /// Extra word -> tag entries for the lexicon tagger
    #[serde(default)]
    pub lexicon: HashMap<String, String>,
}

fn default_target_noun() -> String {
    singular_usage::TARGET_NOUN.to_string()
}

fn default_noun_tags() -> Vec<String> {
    singular_usage::SINGULAR_NOUN_TAGS
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn default_verb_tags() -> Vec<String> {
    singular_usage::SINGULAR_VERB_TAGS
        .iter()
        .map(|t| t.to_string())
        .collect()
}

impl Default for SingularUsageConfig {
    fn default() -> Self {
        Self {
            target_noun: default_target_noun(),
            singular_noun_tags: default_noun_tags(),
            singular_verb_tags: default_verb_tags(),
            lexicon: HashMap::new(),
        }
    }
}

impl SingularUsageConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.target_noun.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "analysis.singular_usage.target_noun".to_string(),
                message: "Cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A reusable review comment and the text that triggers it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardComment {
    pub trigger: String,
    pub text: String,
}

impl StandardComment {
    pub fn new(trigger: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            text: text.into(),
        }
    }
}

/// Standard comments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentsConfig {
    #[serde(default)]
    pub standard: Vec<StandardComment>,
}

impl CommentsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (i, comment) in self.standard.iter().enumerate() {
            if comment.trigger.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("analysis.comments.standard[{}].trigger", i),
                    message: "Cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
