//! Document analyzer
//!
//! Owns the analysis configuration and the part-of-speech tagger, and runs
//! each proofreading command over a document's text ranges.

use edittools_config::AnalysisConfig;
use edittools_core::{PosTagger, TextRange};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use crate::comments::{find_comment_sites, CommentSite, CommentedSpan};
use crate::frequency::{self, FrequencyTable};
use crate::proper_nouns::{ProperNounClassifier, ProperNounReport};
use crate::usage::{LexiconTagger, SentenceFlag, SingularUsageDetector};
use crate::Result;

/// Runs analysis commands with one configuration and tagger
pub struct DocumentAnalyzer {
    config: AnalysisConfig,
    tagger: Arc<dyn PosTagger>,
}

impl DocumentAnalyzer {
    /// Create an analyzer using the lexicon tagger built from `config`
    pub fn new(config: AnalysisConfig) -> Self {
        let tagger = Arc::new(LexiconTagger::from_config(&config.singular_usage));
        Self { config, tagger }
    }

    /// Replace the part-of-speech tagger
    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn tagger_name(&self) -> &str {
        self.tagger.name()
    }

    fn timed<T>(&self, command: &'static str, run: impl FnOnce() -> T) -> T {
        let _span = tracing::debug_span!("analysis", command).entered();
        let start = Instant::now();
        let output = run();
        tracing::debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Analysis step finished"
        );
        output
    }

    /// Distinct words in ordinal order
    pub fn word_list(&self, ranges: &[TextRange]) -> BTreeSet<String> {
        let words = self.timed("word_list", || frequency::word_list(ranges));
        tracing::info!(ranges = ranges.len(), words = words.len(), "Built word list");
        words
    }

    pub fn word_frequencies(&self, ranges: &[TextRange]) -> FrequencyTable {
        let table = self.timed("word_frequencies", || frequency::word_frequencies(ranges));
        tracing::info!(
            ranges = ranges.len(),
            distinct = table.len(),
            total = table.total(),
            "Counted word frequencies"
        );
        table
    }

    /// Phrase counts using the configured length bounds
    pub fn phrase_frequencies(&self, ranges: &[TextRange]) -> Result<FrequencyTable> {
        let phrases = self.config.phrases;
        let table = self.timed("phrase_frequencies", || {
            frequency::phrase_frequencies(ranges, &phrases)
        })?;
        tracing::info!(
            min_length = phrases.min_length,
            max_length = phrases.max_length,
            distinct = table.len(),
            "Counted phrase frequencies"
        );
        Ok(table)
    }

    pub fn proper_nouns(&self, ranges: &[TextRange]) -> Result<ProperNounReport> {
        let classifier = ProperNounClassifier::new(&self.config.proper_nouns)?;
        let report = self.timed("proper_nouns", || classifier.classify(ranges));
        tracing::info!(
            candidates = report.candidates.len(),
            phonetic_groups = report.phonetic_groups.len(),
            distance_groups = report.distance_groups.len(),
            "Checked proper nouns"
        );
        Ok(report)
    }

    pub fn singular_usage(&self, ranges: &[TextRange]) -> Vec<SentenceFlag> {
        let detector =
            SingularUsageDetector::new(self.tagger.clone(), self.config.singular_usage.clone());
        let flags = self.timed("singular_usage", || detector.scan(ranges));
        tracing::info!(
            tagger = self.tagger.name(),
            sentences = flags.len(),
            flagged = flags.iter().filter(|f| f.flagged).count(),
            "Checked singular usage"
        );
        flags
    }

    /// Sites for the configured standard comments
    pub fn comment_sites(
        &self,
        ranges: &[TextRange],
        only_trigger: Option<&str>,
        existing: &[CommentedSpan],
    ) -> Result<Vec<CommentSite>> {
        let sites = self.timed("comment_sites", || {
            find_comment_sites(ranges, &self.config.comments.standard, only_trigger, existing)
        })?;
        tracing::info!(
            comments = self.config.comments.standard.len(),
            sites = sites.len(),
            "Located standard comment sites"
        );
        Ok(sites)
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextProcessingError;
    use edittools_config::{PhraseConfig, StandardComment};
    use edittools_core::TaggedWord;

    struct NounTagger;

    impl PosTagger for NounTagger {
        fn tag(&self, sentence: &str) -> edittools_core::Result<Vec<TaggedWord>> {
            Ok(sentence
                .split_whitespace()
                .map(|w| TaggedWord::new(w, "NN"))
                .collect())
        }

        fn name(&self) -> &str {
            "nouns"
        }
    }

    fn document() -> Vec<TextRange> {
        vec![
            TextRange::new("Stanford Results", "Heading 1"),
            TextRange::plain("The data is clear. Stanford and Stanfrd agree.")
                .with_sentences(vec![0..19, 19..46])
                .unwrap(),
        ]
    }

    #[test]
    fn test_default_tagger() {
        let analyzer = DocumentAnalyzer::default();
        assert_eq!(analyzer.tagger_name(), "lexicon");

        let analyzer = analyzer.with_tagger(Arc::new(NounTagger));
        assert_eq!(analyzer.tagger_name(), "nouns");
    }

    #[test]
    fn test_word_commands() {
        let analyzer = DocumentAnalyzer::default();
        let ranges = document();

        let words = analyzer.word_list(&ranges);
        assert!(words.contains("Stanfrd"));
        assert!(words.contains("Results"));

        let table = analyzer.word_frequencies(&ranges);
        assert_eq!(table.get("Stanford"), Some(2));
    }

    #[test]
    fn test_phrase_bounds_checked() {
        let config = AnalysisConfig {
            phrases: PhraseConfig::new(3, 2),
            ..Default::default()
        };
        let analyzer = DocumentAnalyzer::new(config);
        assert!(matches!(
            analyzer.phrase_frequencies(&document()),
            Err(TextProcessingError::InvalidPhraseLength { min: 3, max: 2 })
        ));
    }

    #[test]
    fn test_proper_nouns_skip_headings() {
        let analyzer = DocumentAnalyzer::default();
        let report = analyzer.proper_nouns(&document()).unwrap();
        assert!(!report.candidates.contains("Results"));
        assert_eq!(report.distance_groups["Stanford"], vec!["Stanfrd".to_string()]);
    }

    #[test]
    fn test_singular_usage() {
        let flags = DocumentAnalyzer::default().singular_usage(&document());
        assert_eq!(flags.len(), 3);
        assert!(!flags[0].has_target);
        assert!(flags[1].flagged);
        assert_eq!(flags[1].range_index, 1);
        assert_eq!(flags[1].sentence_index, 0);
        assert!(!flags[2].flagged);

        // Tagging everything NN flags the noun itself
        let analyzer = DocumentAnalyzer::default().with_tagger(Arc::new(NounTagger));
        let flagged: Vec<_> = analyzer
            .singular_usage(&document())
            .into_iter()
            .filter(|f| f.flagged)
            .collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].sentence, "The data is clear.");
    }

    #[test]
    fn test_comment_sites() {
        let mut config = AnalysisConfig::default();
        config
            .comments
            .standard
            .push(StandardComment::new("stanford", "Check the name."));
        let analyzer = DocumentAnalyzer::new(config);

        let sites = analyzer.comment_sites(&document(), None, &[]).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].range_index, 0);
        assert_eq!(sites[1].range_index, 1);
    }
}
