//! Canonical anagram signatures.
//!
//! A signature is the letter-frequency histogram of a word. Two words over
//! `a..=z` share a signature exactly when one is a permutation of the other,
//! so the key is collision-free for the game alphabet.

use crate::ALPHABET_SIZE;
use std::fmt;

/// Letter histogram of a word, one count per letter `a..=z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature([u32; ALPHABET_SIZE]);

impl Signature {
    /// Compute the signature of a word.
    ///
    /// Bytes outside `a..=z` are skipped, so the function is total even on
    /// input that never passed through the dictionary loader.
    pub fn of(word: &str) -> Self {
        let mut counts = [0u32; ALPHABET_SIZE];
        for byte in word.bytes() {
            if byte.is_ascii_lowercase() {
                counts[(byte - b'a') as usize] += 1;
            }
        }
        Self(counts)
    }

    /// Per-letter counts, index 0 is `a`.
    pub fn counts(&self) -> &[u32; ALPHABET_SIZE] {
        &self.0
    }

    /// Total number of letters counted.
    pub fn len(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Number of letters that occur at least once.
    pub fn distinct_letters(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }
}

/// Renders as one `#<count>` token per letter, `a` first.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in &self.0 {
            write!(f, "#{}", count)?;
        }
        Ok(())
    }
}
