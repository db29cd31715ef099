//! # Bunagram
//!
//! An anagram game engine.
//!
//! Dictionary words are grouped by their letter histogram. Groups with at
//! least two members are playable: the engine offers one member as the base
//! word and accepts any other dictionary member of the group as a correct
//! guess. Groups are offered without repeats until every playable group has
//! been seen once.

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod index;
pub mod matcher;
pub mod picker;
pub mod registry;
pub mod shuffle;
pub mod signature;

pub use config::{EngineConfig, WordSource};
pub use dictionary::Dictionary;
pub use engine::{Engine, Puzzle};
pub use error::EngineError;
pub use index::AnagramIndex;
pub use matcher::Verdict;
pub use picker::{Pick, Picker};
pub use registry::{load_engine, EngineRegistry};
pub use signature::Signature;

/// Shortest word the dictionary accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// Letters `a` through `z`
pub const ALPHABET_SIZE: usize = 26;

/// Difficulties backed by the embedded word lists
pub const BUILTIN_DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

pub const EASY_WORDS: &str = include_str!("../words/words_easy.txt");
pub const MEDIUM_WORDS: &str = include_str!("../words/words_medium.txt");
pub const HARD_WORDS: &str = include_str!("../words/words_hard.txt");

/// Load one of the embedded dictionaries by difficulty name
pub fn load_builtin(difficulty: &str) -> Option<Dictionary> {
    let text = match difficulty {
        "easy" => EASY_WORDS,
        "medium" => MEDIUM_WORDS,
        "hard" => HARD_WORDS,
        _ => return None,
    };
    Some(Dictionary::parse(text))
}
