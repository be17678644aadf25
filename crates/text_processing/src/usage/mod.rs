//! Usage checks driven by part-of-speech tags

mod lexicon_tagger;
mod singular;

pub use lexicon_tagger::LexiconTagger;
pub use singular::{classify_tagged, SentenceFlag, SingularUsageDetector, SingularVerdict};
