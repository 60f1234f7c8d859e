//! Game settings
//!
//! Read once at start-up from `settings.json` in the working directory. Every
//! field has a default, so a partial file only overrides what it names.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TARGET_FPS;
use crate::highscores::DEFAULT_HIGH_SCORE_PATH;

/// Settings file, relative to the working directory
pub const SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// High score text file
    pub high_score_path: PathBuf,
    /// Optional menu background image
    pub background_image: PathBuf,
    /// Frame pacing target
    pub target_fps: u32,
    /// Show FPS counter
    pub show_fps: bool,
    /// Seed for the first session (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            background_image: PathBuf::from("3d_sphere.png"),
            target_fps: TARGET_FPS,
            show_fps: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        if settings.target_fps == 0 {
            log::warn!("target_fps of 0 is not usable, using {}", TARGET_FPS);
            settings.target_fps = TARGET_FPS;
        }
        Ok(settings)
    }

    /// Read settings from a file, propagating any failure
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.high_score_path, PathBuf::from("high_score.txt"));
        assert_eq!(settings.background_image, PathBuf::from("3d_sphere.png"));
        assert_eq!(settings.target_fps, 60);
        assert!(!settings.show_fps);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "show_fps": true, "seed": 7 }"#).unwrap();
        assert!(settings.show_fps);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.high_score_path, PathBuf::from("high_score.txt"));
    }

    #[test]
    fn test_zero_fps_is_replaced() {
        let settings = Settings::from_json(r#"{ "target_fps": 0 }"#).unwrap();
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("settings.json");
        assert_eq!(Settings::load(&missing), Settings::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "[1, 2").unwrap();
        assert_eq!(Settings::load(&broken), Settings::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "target_fps": 120, "high_score_path": "scores/best.txt" }"#)
            .unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.target_fps, 120);
        assert_eq!(settings.high_score_path, PathBuf::from("scores/best.txt"));
    }
}
