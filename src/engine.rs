//! A playable anagram engine for one difficulty level.

use crate::dictionary::Dictionary;
use crate::error::{EngineError, Result};
use crate::index::AnagramIndex;
use crate::matcher::{self, Verdict};
use crate::picker::{Pick, Picker};
use crate::signature::Signature;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A puzzle ready to show a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub difficulty: String,
    pub base: String,
    /// The base word's letters, rearranged.
    pub scrambled: String,
    /// Another accepted answer, if the group has one besides the base.
    pub example: Option<String>,
    pub signature: Signature,
}

/// Dictionary, anagram index and picker for one difficulty.
///
/// The dictionary and index are read-only after construction. The picker
/// sits behind a mutex, so `pick` can be called from many threads without
/// breaking the no-repeat guarantee.
#[derive(Debug)]
pub struct Engine {
    difficulty: String,
    dictionary: Dictionary,
    index: Arc<AnagramIndex>,
    picker: Mutex<Picker<StdRng>>,
}

impl Engine {
    /// Build an engine with an entropy-seeded random source.
    ///
    /// Fails with [`EngineError::NoPlayableGroups`] if no two dictionary
    /// words are anagrams of each other.
    pub fn new(difficulty: impl Into<String>, dictionary: Dictionary) -> Result<Self> {
        Self::with_rng(difficulty.into(), dictionary, StdRng::from_entropy())
    }

    /// Build an engine whose picks are reproducible for a given seed.
    pub fn with_seed(
        difficulty: impl Into<String>,
        dictionary: Dictionary,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(difficulty.into(), dictionary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: String, dictionary: Dictionary, rng: StdRng) -> Result<Self> {
        let index = Arc::new(AnagramIndex::build(&dictionary));
        if index.playable_count() == 0 {
            return Err(EngineError::NoPlayableGroups);
        }

        info!(
            "{}: {} words, {} groups, {} playable",
            difficulty,
            dictionary.len(),
            index.group_count(),
            index.playable_count()
        );

        Ok(Self {
            difficulty,
            dictionary,
            picker: Mutex::new(Picker::new(Arc::clone(&index), rng)),
            index,
        })
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn index(&self) -> &AnagramIndex {
        &self.index
    }

    fn picker(&self) -> MutexGuard<'_, Picker<StdRng>> {
        // The picker's state is valid after any single insert or clear,
        // so a poisoned lock is still usable.
        self.picker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pick the next anagram group.
    pub fn pick(&self) -> Result<Pick> {
        self.picker().pick()
    }

    /// Pick the next group and scramble its base word.
    pub fn puzzle(&self) -> Result<Puzzle> {
        let mut picker = self.picker();
        let pick = picker.pick()?;
        let scrambled = picker.scramble(&pick.base);
        drop(picker);

        Ok(Puzzle {
            difficulty: self.difficulty.clone(),
            example: pick.example().map(str::to_string),
            scrambled,
            base: pick.base,
            signature: pick.signature,
        })
    }

    /// Whether `guess` is an accepted anagram of `base`.
    pub fn check(&self, base: &str, guess: &str) -> bool {
        matcher::check(&self.dictionary, base, guess)
    }

    /// Like [`Engine::check`] but reports which check failed.
    pub fn judge(&self, base: &str, guess: &str) -> Verdict {
        matcher::judge(&self.dictionary, base, guess)
    }

    /// A dictionary anagram of `base` other than `base` itself.
    pub fn example(&self, base: &str) -> Option<String> {
        self.index
            .anagrams_of(base)
            .iter()
            .find(|w| w.as_str() != base)
            .cloned()
    }

    /// Forget which groups were offered and start a fresh cycle.
    pub fn reset(&self) {
        self.picker().reset();
    }
}
