//! No-repeat puzzle selection.
//!
//! The picker walks the playable groups of an [`AnagramIndex`] in random
//! order. A group is not offered twice until every playable group has been
//! offered once; at that point the cycle resets and all groups are eligible
//! again.

use crate::error::{EngineError, Result};
use crate::index::AnagramIndex;
use crate::shuffle::{scramble, shuffle};
use crate::signature::Signature;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

/// One picked anagram group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    /// The word whose letters make up the puzzle.
    pub base: String,
    /// Every member of the group in random order; `anagrams[0] == base`.
    pub anagrams: Vec<String>,
    pub signature: Signature,
}

impl Pick {
    /// The first group member other than the base word.
    pub fn example(&self) -> Option<&str> {
        self.anagrams
            .iter()
            .find(|w| **w != self.base)
            .map(String::as_str)
    }
}

/// Stateful selector over the playable groups of one index.
///
/// The picker owns a handle to its index, so the offered set only ever
/// holds signatures from that index.
#[derive(Debug, Clone)]
pub struct Picker<R> {
    index: Arc<AnagramIndex>,
    offered: HashSet<Signature>,
    rng: R,
}

impl<R: Rng> Picker<R> {
    pub fn new(index: Arc<AnagramIndex>, rng: R) -> Self {
        Self {
            index,
            offered: HashSet::new(),
            rng,
        }
    }

    pub fn index(&self) -> &AnagramIndex {
        &self.index
    }

    /// Signatures offered since the last cycle reset.
    pub fn offered(&self) -> &HashSet<Signature> {
        &self.offered
    }

    /// Pick a playable group not yet offered in the current cycle.
    pub fn pick(&mut self) -> Result<Pick> {
        let index = Arc::clone(&self.index);
        let playable = index.playable();
        if playable.is_empty() {
            return Err(EngineError::NoPlayableGroups);
        }

        if self.offered.len() >= playable.len() {
            debug!("all {} playable groups offered, starting a new cycle", playable.len());
            self.offered.clear();
        }

        let mut pool: Vec<Signature> = playable
            .iter()
            .filter(|sig| !self.offered.contains(*sig))
            .copied()
            .collect();
        if pool.is_empty() {
            warn!(
                "no unoffered group left after cycle check ({} offered), using full playable set",
                self.offered.len()
            );
            pool = playable.to_vec();
        }

        let signature = *pool
            .choose(&mut self.rng)
            .expect("candidate pool holds at least one playable signature");
        self.offered.insert(signature);

        let mut anagrams = index.members(&signature).to_vec();
        shuffle(&mut anagrams, &mut self.rng);
        let base = anagrams[0].clone();

        debug!(
            "picked `{}` from a group of {} ({} of {} offered this cycle)",
            base,
            anagrams.len(),
            self.offered.len(),
            playable.len()
        );

        Ok(Pick {
            base,
            anagrams,
            signature,
        })
    }

    /// Rearrange the letters of `word` with the picker's random source.
    pub fn scramble(&mut self, word: &str) -> String {
        scramble(word, &mut self.rng)
    }

    /// Forget every offered group and start a fresh cycle.
    pub fn reset(&mut self) {
        self.offered.clear();
    }
}
