//! Grouping of dictionary words into anagram classes.

use crate::dictionary::Dictionary;
use crate::signature::Signature;
use rayon::prelude::*;
use std::collections::HashMap;

/// Minimum group size for a group to be offered as a puzzle.
pub const PLAYABLE_GROUP_SIZE: usize = 2;

/// Dictionary words partitioned by signature.
///
/// Built once per dictionary and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    groups: HashMap<Signature, Vec<String>>,
    /// Signatures with at least [`PLAYABLE_GROUP_SIZE`] members, in the
    /// order each group was first seen.
    playable: Vec<Signature>,
}

impl AnagramIndex {
    /// Group every dictionary word under its signature.
    ///
    /// Signatures are computed in parallel; members are appended in
    /// dictionary order.
    pub fn build(dictionary: &Dictionary) -> Self {
        let words = dictionary.words();
        let signatures: Vec<Signature> = words.par_iter().map(|w| Signature::of(w)).collect();

        let mut groups: HashMap<Signature, Vec<String>> = HashMap::new();
        let mut first_seen = Vec::new();
        for (word, signature) in words.iter().zip(signatures) {
            let members = groups.entry(signature).or_insert_with(|| {
                first_seen.push(signature);
                Vec::new()
            });
            members.push(word.clone());
        }

        let playable = first_seen
            .into_iter()
            .filter(|sig| groups[sig].len() >= PLAYABLE_GROUP_SIZE)
            .collect();

        Self { groups, playable }
    }

    /// Members sharing `signature`, or an empty slice if there are none.
    pub fn members(&self, signature: &Signature) -> &[String] {
        self.groups.get(signature).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Members of the group `word` would belong to.
    pub fn anagrams_of(&self, word: &str) -> &[String] {
        self.members(&Signature::of(word))
    }

    pub fn playable(&self) -> &[Signature] {
        &self.playable
    }

    pub fn is_playable(&self, signature: &Signature) -> bool {
        self.members(signature).len() >= PLAYABLE_GROUP_SIZE
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn playable_count(&self) -> usize {
        self.playable.len()
    }

    pub fn word_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of groups of each size, sorted by size.
    pub fn size_distribution(&self) -> Vec<(usize, usize)> {
        let max_size = self.groups.values().map(Vec::len).max().unwrap_or(0);
        let mut distribution = vec![0usize; max_size + 1];

        for members in self.groups.values() {
            distribution[members.len()] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
