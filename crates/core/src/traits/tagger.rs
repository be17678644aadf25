//! Part-of-speech tagging interface

use crate::{Result, TaggedWord};

/// Part-of-speech tagger interface
///
/// Maps raw sentence text to a sequence of (word, tag) pairs. The tags are
/// whatever inventory the tagger uses; consumers that match on tags take the
/// tag names from configuration so taggers can be swapped freely.
///
/// Implementations:
/// - `LexiconTagger` - lexicon and suffix rules, no model files
///
/// # Example
///
/// ```ignore
/// let tagger: Arc<dyn PosTagger> = Arc::new(LexiconTagger::default());
/// let tagged = tagger.tag("The data is clear.")?;
/// // [("The", "DT"), ("data", "NNS"), ("is", "VBZ"), ("clear", "JJ"), (".", ".")]
/// ```
pub trait PosTagger: Send + Sync {
    /// Tag a single sentence
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedWord>>;

    /// Tagger name for logging
    fn name(&self) -> &str {
        "tagger"
    }
}
