//! Engines for every configured difficulty, loaded once and shared.

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::{EngineError, Result};
use log::{error, info};
use std::collections::BTreeMap;

/// Load and build the engine for one difficulty.
pub fn load_engine(config: &EngineConfig, difficulty: &str) -> Result<Engine> {
    let source = config
        .source(difficulty)
        .ok_or_else(|| EngineError::UnknownDifficulty(difficulty.to_string()))?;

    info!("loading `{}` words from {}", difficulty, source.describe());
    let dictionary = source.load()?;

    let engine = match config.seed_for(difficulty) {
        Some(seed) => Engine::with_seed(difficulty, dictionary, seed),
        None => Engine::new(difficulty, dictionary),
    };
    engine.map_err(|e| {
        error!("`{}` cannot be played: {}", difficulty, e);
        e
    })
}

/// One engine per difficulty, built eagerly.
///
/// Create it once at startup and hand out references; nothing here is
/// global.
#[derive(Debug, Default)]
pub struct EngineRegistry {
    engines: BTreeMap<String, Engine>,
}

impl EngineRegistry {
    /// Build an engine for every difficulty in `config`, failing on the first
    /// that cannot be loaded or has nothing to play.
    pub fn load(config: &EngineConfig) -> Result<Self> {
        let mut engines = BTreeMap::new();
        for (difficulty, _) in config.sources() {
            engines.insert(difficulty.to_string(), load_engine(config, difficulty)?);
        }
        Ok(Self { engines })
    }

    pub fn insert(&mut self, engine: Engine) {
        self.engines.insert(engine.difficulty().to_string(), engine);
    }

    pub fn engine(&self, difficulty: &str) -> Result<&Engine> {
        self.engines
            .get(difficulty)
            .ok_or_else(|| EngineError::UnknownDifficulty(difficulty.to_string()))
    }

    pub fn difficulties(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
