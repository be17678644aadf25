//! Edit-distance grouping of similar words
//!
//! Groups are built greedily: words are visited in ascending order, each
//! unclaimed word becomes an anchor, and every word within the threshold is
//! claimed as its neighbour. A claimed word never becomes an anchor itself,
//! so the result depends on visiting order and is not a global clustering.

use std::collections::{BTreeMap, BTreeSet};

/// Levenshtein distance over Unicode scalar values, case-sensitive
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Step-wise greedy grouping
///
/// Each call to `next` processes anchors until one with neighbours is found,
/// so a long scan can be interrupted between steps by simply not polling.
pub struct DistanceGrouping {
    words: Vec<String>,
    claimed: Vec<bool>,
    cursor: usize,
    threshold: usize,
}

impl DistanceGrouping {
    /// Words with at most `min_length` characters take no part in grouping
    pub fn new(words: &BTreeSet<String>, min_length: usize, threshold: usize) -> Self {
        let words: Vec<String> = words
            .iter()
            .filter(|w| w.chars().count() > min_length)
            .cloned()
            .collect();
        let claimed = vec![false; words.len()];

        Self {
            words,
            claimed,
            cursor: 0,
            threshold,
        }
    }

    /// Number of words taking part in grouping
    pub fn eligible(&self) -> usize {
        self.words.len()
    }

    /// Anchors visited so far
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl Iterator for DistanceGrouping {
    type Item = (String, Vec<String>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.words.len() {
            let anchor = self.cursor;
            self.cursor += 1;

            if self.claimed[anchor] {
                continue;
            }
            self.claimed[anchor] = true;

            let mut neighbours = Vec::new();
            for candidate in 0..self.words.len() {
                let distance = edit_distance(&self.words[anchor], &self.words[candidate]);
                if distance > 0 && distance <= self.threshold {
                    // Words claimed by an earlier anchor still join this group
                    self.claimed[candidate] = true;
                    neighbours.push(self.words[candidate].clone());
                }
            }

            if !neighbours.is_empty() {
                return Some((self.words[anchor].clone(), neighbours));
            }
        }
        None
    }
}

/// Anchor -> neighbours for every anchor that found at least one neighbour
pub fn group_by_distance(
    words: &BTreeSet<String>,
    min_length: usize,
    threshold: usize,
) -> BTreeMap<String, Vec<String>> {
    DistanceGrouping::new(words, min_length, threshold).collect()
}
