//! Engine configuration: difficulty names mapped to word-list sources.
//!
//! Reads `BUNAGRAM_WORDS_DIR` and `BUNAGRAM_SEED` on top of the built-in
//! word lists.

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::{BUILTIN_DIFFICULTIES, EASY_WORDS, HARD_WORDS, MEDIUM_WORDS};
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const WORDS_DIR_VAR: &str = "BUNAGRAM_WORDS_DIR";
pub const SEED_VAR: &str = "BUNAGRAM_SEED";

/// Where a difficulty's words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// A word list compiled into the binary.
    Embedded(&'static str),
    /// A UTF-8 text file, one word per line.
    File(PathBuf),
}

impl WordSource {
    pub fn load(&self) -> Result<Dictionary> {
        match self {
            WordSource::Embedded(text) => Ok(Dictionary::parse(text)),
            WordSource::File(path) => Dictionary::from_path(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            WordSource::Embedded(_) => "<embedded>".to_string(),
            WordSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    sources: BTreeMap<String, WordSource>,
    seed: Option<u64>,
}

impl EngineConfig {
    /// An empty configuration with no difficulties.
    pub fn new() -> Self {
        Self::default()
    }

    /// `easy`, `medium` and `hard` backed by the embedded word lists.
    pub fn builtin() -> Self {
        let lists = [EASY_WORDS, MEDIUM_WORDS, HARD_WORDS];
        BUILTIN_DIFFICULTIES
            .iter()
            .zip(lists)
            .fold(Self::new(), |config, (name, text)| {
                config.with_source(*name, WordSource::Embedded(text))
            })
    }

    /// [`EngineConfig::builtin`] with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::builtin();

        if let Ok(dir) = std::env::var(WORDS_DIR_VAR) {
            info!("{}={}", WORDS_DIR_VAR, dir);
            let dir = PathBuf::from(dir);
            for name in BUILTIN_DIFFICULTIES {
                let path = dir.join(format!("words_{}.txt", name));
                config = config.with_source(name, WordSource::File(path));
            }
        }

        if let Ok(raw) = std::env::var(SEED_VAR) {
            match raw.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!("ignoring {}={:?}: not a u64", SEED_VAR, raw),
            }
        }

        config
    }

    /// Register or replace a difficulty.
    pub fn with_source(mut self, difficulty: impl Into<String>, source: WordSource) -> Self {
        self.sources.insert(difficulty.into(), source);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn source(&self, difficulty: &str) -> Option<&WordSource> {
        self.sources.get(difficulty)
    }

    pub fn sources(&self) -> impl Iterator<Item = (&str, &WordSource)> {
        self.sources.iter().map(|(name, source)| (name.as_str(), source))
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seed for one difficulty, derived from the base seed and the name so
    /// that difficulties do not share a random stream.
    pub fn seed_for(&self, difficulty: &str) -> Option<u64> {
        self.seed.map(|seed| {
            difficulty
                .bytes()
                .fold(seed, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)))
        })
    }
}
