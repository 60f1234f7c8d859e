//! High score persistence
//!
//! A single integer in a text file, written as decimal ASCII.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default high score file, relative to the working directory
pub const DEFAULT_HIGH_SCORE_PATH: &str = "high_score.txt";

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("failed to access high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("high score file {path} holds {contents:?}, not a number: {source}")]
    Parse {
        path: PathBuf,
        contents: String,
        #[source]
        source: ParseIntError,
    },
}

/// Where the high score lives between runs
pub trait HighScoreStore {
    /// Stored value, or 0 when nothing has been stored yet
    fn load(&self) -> Result<u64, HighScoreError>;

    /// Overwrite the stored value
    fn save(&mut self, score: u64) -> Result<(), HighScoreError>;
}

/// High score kept in a plain text file
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for HighScoreFile {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_PATH)
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> Result<u64, HighScoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score file at {}, starting from 0", self.path.display());
                return Ok(0);
            }
            Err(source) => {
                return Err(HighScoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let score = contents
            .trim()
            .parse::<u64>()
            .map_err(|source| HighScoreError::Parse {
                path: self.path.clone(),
                contents: contents.clone(),
                source,
            })?;
        log::info!("Loaded high score {} from {}", score, self.path.display());
        Ok(score)
    }

    fn save(&mut self, score: u64) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}
