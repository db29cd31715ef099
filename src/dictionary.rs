//! Word-list loading and normalization.

use crate::error::{EngineError, Result};
use crate::MIN_WORD_LENGTH;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Normalize one raw line into a game word.
///
/// Trims, lowercases, and rejects anything shorter than [`MIN_WORD_LENGTH`]
/// or containing a character outside `a..=z`.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if word.len() < MIN_WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}

/// An immutable set of unique game words.
///
/// Iteration order is first-seen order in the source text, which fixes the
/// member order of every anagram group built from it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw text, one candidate word per line.
    ///
    /// Blank lines, comments and anything else that fails normalization
    /// are dropped. An empty result is not an error.
    pub fn parse(text: &str) -> Self {
        let mut dictionary = Self::default();
        for word in text.lines().filter_map(normalize_word) {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Read and parse a word-list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| EngineError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    fn insert(&mut self, word: String) {
        if self.lookup.insert(word.clone()) {
            self.words.push(word);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::default();
        for word in iter.into_iter().filter_map(|w| normalize_word(w.as_ref())) {
            dictionary.insert(word);
        }
        dictionary
    }
}
