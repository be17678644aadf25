//! Text spans supplied by the host document model

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::{Error, Result};

/// Style name used when the host does not report one
pub const DEFAULT_STYLE: &str = "Normal";

/// An immutable span of document text with its style name
///
/// The style is only used to decide inclusion (heading-like ranges are
/// skipped by the proper noun classifier). Sentence boundaries come from the
/// host; when none are given the whole range is treated as one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    text: String,
    style: String,
    #[serde(default)]
    sentences: Vec<Range<usize>>,
}

impl TextRange {
    /// Create a range with the given style
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
            sentences: Vec::new(),
        }
    }

    /// Create a range with the default "Normal" style
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, DEFAULT_STYLE)
    }

    /// Attach host-provided sentence boundaries (byte offsets into the text)
    ///
    /// Every boundary must lie inside the text and on a character boundary.
    pub fn with_sentences(mut self, sentences: Vec<Range<usize>>) -> Result<Self> {
        for bounds in &sentences {
            if bounds.start > bounds.end || self.text.get(bounds.clone()).is_none() {
                return Err(Error::InvalidInput(format!(
                    "sentence bounds {:?} do not fit a text of {} bytes",
                    bounds,
                    self.text.len()
                )));
            }
        }
        self.sentences = sentences;
        Ok(self)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// Byte spans of the sentences in this range
    pub fn sentence_bounds(&self) -> Vec<Range<usize>> {
        if self.sentences.is_empty() {
            vec![0..self.text.len()]
        } else {
            self.sentences.clone()
        }
    }

    /// Sentence texts in document order
    pub fn sentences(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentence_bounds()
            .into_iter()
            .filter_map(move |bounds| self.text.get(bounds))
    }
}

/// A surface word paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

impl<W: Into<String>, T: Into<String>> From<(W, T)> for TaggedWord {
    fn from((word, tag): (W, T)) -> Self {
        Self::new(word, tag)
    }
}
