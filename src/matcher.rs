//! Guess validation.
//!
//! A guess is accepted only if it is a dictionary word of the same length
//! and with the same signature as the base word. Words missing from the
//! dictionary are rejected even when they are real anagrams.

use crate::dictionary::Dictionary;
use crate::signature::Signature;
use std::fmt;

/// Outcome of judging a guess, with the first failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    /// Nothing left after trimming.
    Empty,
    /// Contains a character outside `a..=z`.
    NotAlphabetic,
    LengthMismatch,
    NotInDictionary,
    NotAnagram,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }

    /// Short human-readable reason.
    pub fn reason(self) -> &'static str {
        match self {
            Verdict::Correct => "correct",
            Verdict::Empty => "empty guess",
            Verdict::NotAlphabetic => "only letters a-z are allowed",
            Verdict::LengthMismatch => "wrong number of letters",
            Verdict::NotInDictionary => "not in the word list",
            Verdict::NotAnagram => "not an anagram of the base word",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Judge `guess` against `base`, checks applied in order.
pub fn judge(dictionary: &Dictionary, base: &str, guess: &str) -> Verdict {
    let guess = guess.trim().to_lowercase();

    if guess.is_empty() {
        return Verdict::Empty;
    }
    if !guess.bytes().all(|b| b.is_ascii_lowercase()) {
        return Verdict::NotAlphabetic;
    }
    if guess.len() != base.len() {
        return Verdict::LengthMismatch;
    }
    if !dictionary.contains(&guess) {
        return Verdict::NotInDictionary;
    }
    if Signature::of(&guess) != Signature::of(base) {
        return Verdict::NotAnagram;
    }
    Verdict::Correct
}

/// Whether `guess` is an accepted anagram of `base`.
pub fn check(dictionary: &Dictionary, base: &str, guess: &str) -> bool {
    judge(dictionary, base, guess).is_correct()
}
