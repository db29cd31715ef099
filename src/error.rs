//! Error taxonomy for building and querying engines.
//!
//! Only construction-time faults live here. A wrong guess is an ordinary
//! `false` from the matcher, never an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The word list could not be read (missing file, permissions, invalid UTF-8).
    #[error("failed to load word list {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary has no anagram group with two or more members.
    #[error("no playable anagram groups; add more words to the dictionary")]
    NoPlayableGroups,

    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
