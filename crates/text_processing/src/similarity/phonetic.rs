//! Short Double Metaphone keys
//!
//! Double Metaphone codes (at most four symbols) packed into 16 bits, one
//! nibble per symbol. Two words sound alike when they share either key.

use rphonetic::DoubleMetaphone;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::panic::{self, AssertUnwindSafe};

/// Marks a missing key: a word that can not be encoded has no primary key
pub const NO_KEY: u16 = u16::MAX;

/// Marks a word without an alternate pronunciation
pub const NO_ALTERNATE_KEY: u16 = NO_KEY;

/// Metaphone symbols in nibble order (nibble = index + 1)
///
/// Nibble 0 is padding and 0xF is never produced, so a packed key can not
/// collide with [`NO_ALTERNATE_KEY`].
const SYMBOLS: [char; 14] = [
    'A', 'F', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'X', '0',
];

const MAX_SYMBOLS: usize = 4;

/// Primary and alternate keys of one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneticKeys {
    pub primary: u16,
    pub alternate: u16,
}

impl PhoneticKeys {
    const UNENCODED: Self = Self {
        primary: NO_KEY,
        alternate: NO_KEY,
    };

    pub fn has_primary(&self) -> bool {
        self.primary != NO_KEY
    }

    pub fn has_alternate(&self) -> bool {
        self.alternate != NO_ALTERNATE_KEY
    }

    /// Distinct keys usable for grouping (the sentinel is skipped)
    pub fn keys(&self) -> impl Iterator<Item = u16> {
        let primary = self.has_primary().then_some(self.primary);
        let alternate =
            (self.has_alternate() && self.alternate != self.primary).then_some(self.alternate);
        primary.into_iter().chain(alternate)
    }
}

/// Computes [`PhoneticKeys`]
pub struct PhoneticEncoder {
    encoder: DoubleMetaphone,
}

impl Default for PhoneticEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneticEncoder {
    pub fn new() -> Self {
        Self {
            encoder: DoubleMetaphone::default(),
        }
    }

    /// Compute both keys for a word
    ///
    /// Total and deterministic. Only Latin-script words are encoded; apostrophes
    /// and other non-letters are dropped first. A word with letters outside
    /// ASCII, or one that yields an empty code ("Hh"), gets [`NO_KEY`] for both
    /// keys and never joins a group.
    pub fn compute_keys(&self, word: &str) -> PhoneticKeys {
        let Some(letters) = encodable_letters(word) else {
            tracing::trace!(word, "Word not phonetically encodable");
            return PhoneticKeys::UNENCODED;
        };

        let encoded = panic::catch_unwind(AssertUnwindSafe(|| {
            let result = self.encoder.double_metaphone(&letters);
            (result.primary().to_string(), result.alternate().to_string())
        }));

        let (primary, alternate) = match encoded {
            Ok(codes) => codes,
            Err(_) => {
                tracing::warn!(word, "Double Metaphone panicked; word left unencoded");
                return PhoneticKeys::UNENCODED;
            }
        };

        let primary = pack_lenient(&primary);
        if primary == 0 {
            return PhoneticKeys::UNENCODED;
        }

        let alternate = if alternate.is_empty() {
            NO_KEY
        } else {
            pack_strict(&alternate)
                .filter(|&key| key != primary)
                .unwrap_or(NO_KEY)
        };

        PhoneticKeys { primary, alternate }
    }
}

/// ASCII letters of a word, or `None` when it has non-ASCII letters or no letters at all
fn encodable_letters(word: &str) -> Option<String> {
    if word.chars().any(|c| c.is_alphabetic() && !c.is_ascii()) {
        return None;
    }
    let letters: String = word.chars().filter(char::is_ascii_alphabetic).collect();
    (!letters.is_empty()).then_some(letters)
}

fn nibble(symbol: char) -> Option<u16> {
    SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|i| i as u16 + 1)
}

/// Pack a code, skipping symbols outside the alphabet
fn pack_lenient(code: &str) -> u16 {
    code.chars()
        .filter_map(nibble)
        .take(MAX_SYMBOLS)
        .fold(0, |key, n| (key << 4) | n)
}

/// Pack a code, rejecting symbols outside the alphabet
fn pack_strict(code: &str) -> Option<u16> {
    code.chars()
        .take(MAX_SYMBOLS)
        .try_fold(0u16, |key, c| nibble(c).map(|n| (key << 4) | n))
}

/// Group words that share a phonetic key
///
/// Each word joins the group of its primary key and, when it has one, its
/// alternate key. Only groups with more than one member are returned.
pub fn group_by_phonetics(words: &BTreeSet<String>) -> BTreeMap<u16, Vec<String>> {
    let encoder = PhoneticEncoder::new();
    let mut groups: BTreeMap<u16, Vec<String>> = BTreeMap::new();

    for word in words {
        let keys = encoder.compute_keys(word);
        for key in keys.keys() {
            groups.entry(key).or_default().push(word.clone());
        }
    }

    groups.retain(|key, members| *key != NO_KEY && members.len() > 1);
    groups
}
