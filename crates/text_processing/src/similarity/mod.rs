//! Similarity engines used to spot likely-misspelled proper nouns
//!
//! - **Phonetic**: words sharing a short Double Metaphone key
//! - **Edit distance**: words within a Levenshtein threshold of an anchor

mod edit_distance;
mod phonetic;

pub use edit_distance::{edit_distance, group_by_distance, DistanceGrouping};
pub use phonetic::{group_by_phonetics, PhoneticEncoder, PhoneticKeys, NO_ALTERNATE_KEY, NO_KEY};
