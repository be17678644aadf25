//! Default values for analysis settings

/// Phrase length bounds (words per phrase)
pub mod phrases {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 5;
}

/// Proper noun grouping
pub mod proper_nouns {
    /// Maximum edit distance for two names to be grouped
    pub const DISTANCE_THRESHOLD: usize = 2;

    /// Style names of ranges that never contribute candidates
    pub const EXCLUDED_STYLES: &str = "(?i)(heading|title|date|toc)";
}

/// Singular "data" check
pub mod singular_usage {
    pub const TARGET_NOUN: &str = "data";
    pub const SINGULAR_NOUN_TAGS: &[&str] = &["NN", "NNP"];
    pub const SINGULAR_VERB_TAGS: &[&str] = &["VBZ"];
}

/// Logging
pub mod observability {
    pub const LOG_LEVEL: &str = "info";
}
