//! Lexicon-based part-of-speech tagger
//!
//! A small Penn Treebank tagger for running the singular-usage check without
//! a statistical model: closed-class words and common reporting verbs come
//! from a built-in lexicon (extendable from configuration), everything else
//! falls through capitalization and suffix rules.

use edittools_config::SingularUsageConfig;
use edittools_core::{PosTagger, Result, TaggedWord};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Built-in lexicon (lowercase word -> Penn tag)
static LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();

    let groups: &[(&str, &[&str])] = &[
        (
            "DT",
            &[
                "the", "a", "an", "this", "that", "these", "those", "each", "every", "some",
                "any", "no", "all", "both", "another",
            ],
        ),
        (
            "IN",
            &[
                "of", "in", "on", "at", "by", "for", "with", "from", "about", "into", "over",
                "under", "between", "through", "during", "without", "than", "as", "because",
                "if", "while", "although", "after", "before", "since", "across", "against",
            ],
        ),
        ("CC", &["and", "or", "but", "nor", "yet"]),
        (
            "PRP",
            &["i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them"],
        ),
        ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
        ("TO", &["to"]),
        (
            "MD",
            &["can", "could", "will", "would", "shall", "should", "may", "might", "must"],
        ),
        (
            "VBZ",
            &[
                "is", "has", "does", "seems", "shows", "suggests", "indicates", "remains",
                "appears", "supports", "contains", "includes", "provides", "reveals",
                "demonstrates", "means", "comes", "goes", "says", "needs", "makes",
            ],
        ),
        (
            "VBP",
            &[
                "are", "have", "do", "seem", "show", "suggest", "indicate", "remain", "appear",
                "support", "contain", "include", "provide", "reveal", "demonstrate", "mean",
                "come", "go", "say", "need", "make", "'re", "'ve",
            ],
        ),
        ("VBD", &["was", "were", "had", "did", "showed", "said", "came", "went", "made"]),
        ("VB", &["be"]),
        ("VBN", &["been", "shown", "done", "gone"]),
        ("VBG", &["being"]),
        (
            "RB",
            &["not", "n't", "very", "also", "often", "never", "always", "too", "only"],
        ),
        ("JJ", &["many", "few", "other", "such", "same", "new", "good", "clear"]),
        ("JJR", &["more", "less", "fewer"]),
        ("JJS", &["most", "least"]),
        ("WDT", &["which", "whatever"]),
        ("WP", &["who", "what", "whom"]),
        ("WRB", &["when", "where", "why", "how"]),
        ("EX", &["there"]),
        (
            "NNS",
            &["data", "media", "criteria", "phenomena", "people", "analyses"],
        ),
        ("NN", &["datum", "criterion", "phenomenon", "analysis", "information"]),
    ];

    for (tag, words) in groups {
        for word in *words {
            map.insert(*word, *tag);
        }
    }

    map
});

/// Tagger backed by the built-in lexicon plus optional overrides
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    overrides: HashMap<String, String>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or override lexicon entries (keys are matched lowercased)
    pub fn with_entries(mut self, entries: HashMap<String, String>) -> Self {
        for (word, tag) in entries {
            self.overrides.insert(word.to_lowercase(), tag);
        }
        self
    }

    /// Tagger using the lexicon entries from configuration
    pub fn from_config(config: &SingularUsageConfig) -> Self {
        Self::new().with_entries(config.lexicon.clone())
    }

    fn tag_token(&self, token: &str, sentence_initial: bool) -> String {
        let lower = token.to_lowercase();

        if let Some(tag) = self.overrides.get(&lower) {
            return tag.clone();
        }
        if let Some(tag) = LEXICON.get(lower.as_str()) {
            return (*tag).to_string();
        }

        if !token.chars().any(char::is_alphanumeric) {
            // Penn tags punctuation with itself
            return token.to_string();
        }
        if token.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
            return "CD".to_string();
        }
        if !sentence_initial && token.chars().next().is_some_and(char::is_uppercase) {
            return "NNP".to_string();
        }

        suffix_tag(&lower).to_string()
    }
}

fn suffix_tag(lower: &str) -> &'static str {
    if lower.ends_with("ing") && lower.len() > 4 {
        "VBG"
    } else if lower.ends_with("ed") && lower.len() > 3 {
        "VBD"
    } else if lower.ends_with("ly") && lower.len() > 3 {
        "RB"
    } else if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 2 {
        "NNS"
    } else {
        "NN"
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedWord>> {
        let tagged = sentence
            .split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .enumerate()
            .map(|(i, token)| TaggedWord::new(token, self.tag_token(token, i == 0)))
            .collect();
        Ok(tagged)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tagger: &LexiconTagger, sentence: &str) -> Vec<(String, String)> {
        tagger
            .tag(sentence)
            .unwrap()
            .into_iter()
            .map(|t| (t.word, t.tag))
            .collect()
    }

    fn pair(word: &str, tag: &str) -> (String, String) {
        (word.to_string(), tag.to_string())
    }

    #[test]
    fn test_basic_sentence() {
        let tagger = LexiconTagger::new();
        assert_eq!(
            tags(&tagger, "The data is clear."),
            vec![
                pair("The", "DT"),
                pair("data", "NNS"),
                pair("is", "VBZ"),
                pair("clear", "JJ"),
                pair(".", "."),
            ]
        );
    }

    #[test]
    fn test_sentence_initial_capital_is_not_proper() {
        let tagger = LexiconTagger::new();
        let tagged = tags(&tagger, "Data from Stanford shows growth");
        assert_eq!(tagged[0], pair("Data", "NNS"));
        assert_eq!(tagged[2], pair("Stanford", "NNP"));
        assert_eq!(tagged[3], pair("shows", "VBZ"));
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(suffix_tag("running"), "VBG");
        assert_eq!(suffix_tag("collected"), "VBD");
        assert_eq!(suffix_tag("quickly"), "RB");
        assert_eq!(suffix_tag("samples"), "NNS");
        assert_eq!(suffix_tag("process"), "NN");
        assert_eq!(suffix_tag("table"), "NN");
    }

    #[test]
    fn test_numbers_and_contractions() {
        let tagger = LexiconTagger::new();
        let tagged = tags(&tagger, "We don't have 42 samples");
        assert!(tagged.contains(&pair("42", "CD")));
        assert!(tagged.iter().any(|(w, _)| w == "don't"));
    }

    #[test]
    fn test_overrides() {
        let mut entries = HashMap::new();
        entries.insert("Data".to_string(), "NN".to_string());
        let tagger = LexiconTagger::new().with_entries(entries);
        assert_eq!(tags(&tagger, "data")[0], pair("data", "NN"));
    }

    #[test]
    fn test_from_config() {
        let mut config = SingularUsageConfig::default();
        config
            .lexicon
            .insert("corroborates".to_string(), "VBZ".to_string());
        let tagger = LexiconTagger::from_config(&config);
        assert_eq!(tags(&tagger, "it corroborates")[1], pair("corroborates", "VBZ"));
        assert_eq!(tagger.name(), "lexicon");
    }

    #[test]
    fn test_empty_sentence() {
        assert!(LexiconTagger::new().tag("   ").unwrap().is_empty());
    }
}
