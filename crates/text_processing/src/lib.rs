//! Text analysis for proofreading
//!
//! This crate provides the checks behind the edittools commands:
//! - **Word lists and frequencies**: distinct words and case-sensitive counts
//! - **Phrase frequencies**: lowercased n-gram counts within sentences
//! - **Proper nouns**: capitalized words grouped by sound and by spelling
//! - **Singular usage**: sentences treating "data" as singular, from POS tags
//! - **Standard comments**: where configured review comments apply
//!
//! # Example
//!
//! ```ignore
//! use edittools_config::AnalysisConfig;
//! use edittools_core::TextRange;
//! use edittools_text_processing::DocumentAnalyzer;
//!
//! let analyzer = DocumentAnalyzer::new(AnalysisConfig::default());
//! let ranges = vec![TextRange::plain("Stanford and Stanfrd both appear.")];
//!
//! let report = analyzer.proper_nouns(&ranges)?;
//! println!("{:?}", report.distance_groups);
//! ```

pub mod comments;
pub mod frequency;
pub mod normalizer;
pub mod proper_nouns;
pub mod similarity;
pub mod usage;

mod analyzer;
mod error;

pub use analyzer::DocumentAnalyzer;
pub use error::{Result, TextProcessingError};

pub use comments::{find_comment_sites, CommentSite, CommentedSpan};
pub use frequency::{phrase_frequencies, word_frequencies, word_list, FrequencyTable};
pub use proper_nouns::{keep_caps, ProperNounClassifier, ProperNounReport};
pub use similarity::{
    edit_distance, group_by_distance, group_by_phonetics, DistanceGrouping, PhoneticEncoder,
    PhoneticKeys, NO_ALTERNATE_KEY, NO_KEY,
};
pub use usage::{
    classify_tagged, LexiconTagger, SentenceFlag, SingularUsageDetector, SingularVerdict,
};
