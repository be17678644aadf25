//! Text processing errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error(
        "Invalid phrase length bounds (min {min}, max {max}): both must be greater than zero \
         and min must not exceed max"
    )]
    InvalidPhraseLength { min: usize, max: usize },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Analysis failed during {stage}: {message}")]
    AnalysisFailed { stage: &'static str, message: String },

    #[error(transparent)]
    Core(#[from] edittools_core::Error),
}

pub type Result<T> = std::result::Result<T, TextProcessingError>;
