//! Application configuration.
//!
//! The wallpaper changer reads a JSON file at
//! `$XDG_CONFIG_HOME/hyprkit/wallpaper.json` (the launcher keeps its own file,
//! see [`crate::launcher`]).  Every field is optional — a minimal `{}` file is
//! valid and all fields fall back to their compiled-in defaults.  A missing or
//! malformed file falls back to [`WallpaperConfig::default`] entirely.
//!
//! # Example
//!
//! ```json
//! {
//!   "topics": ["lofi", "1740 - Landscapes"],
//!   "keep": 20,
//!   "wallpaperDir": "~/Pictures/wallpapers/wallhaven"
//! }
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default search topic when none are configured.
const DEFAULT_TOPIC: &str = "lofi";

/// Default number of wallpapers kept on disk.
const DEFAULT_KEEP: u32 = 10;

/// Default download directory (tilde-expanded at use).
const DEFAULT_WALLPAPER_DIR: &str = "~/Pictures/wallpapers/wallhaven";

/// Wallpaper changer configuration.
///
/// `keep` follows the retention contract: `0` disables pruning entirely,
/// a positive value keeps that many most-recently-modified files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperConfig {
    /// Search topics; one is chosen at random per run.
    pub topics: Vec<String>,

    /// Retention keep-count (`0` = never delete).
    pub keep: u32,

    /// Directory wallpapers are downloaded into.  A leading `~/` is
    /// expanded against the user's home directory.
    #[serde(rename = "wallpaperDir")]
    pub wallpaper_dir: String,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            topics: vec![DEFAULT_TOPIC.to_string()],
            keep: DEFAULT_KEEP,
            wallpaper_dir: DEFAULT_WALLPAPER_DIR.to_string(),
        }
    }
}

impl WallpaperConfig {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        // An explicitly empty topic list would leave nothing to search for.
        if config.topics.is_empty() {
            config.topics = vec![DEFAULT_TOPIC.to_string()];
        }
        Ok(config)
    }

    /// Load from the default location, falling back to compiled-in defaults.
    pub fn load_or_default() -> Self {
        let path = config_dir().join("wallpaper.json");
        match Self::load(&path) {
            Ok(cfg) => {
                info!("loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                debug!("no config file ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// The download directory with `~/` expanded.
    pub fn wallpaper_dir(&self) -> PathBuf {
        expand_tilde(&self.wallpaper_dir)
    }
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprkit`).
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("hyprkit")
}

/// Expand a leading `~` or `~/` against the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "topics": ["nature", "42 - Space"],
            "keep": 5,
            "wallpaperDir": "/data/walls"
        }"#;
        let cfg: WallpaperConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.topics, vec!["nature", "42 - Space"]);
        assert_eq!(cfg.keep, 5);
        assert_eq!(cfg.wallpaper_dir, "/data/walls");
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: WallpaperConfig = serde_json::from_str("{}").unwrap();
        let def = WallpaperConfig::default();
        assert_eq!(cfg.topics, def.topics);
        assert_eq!(cfg.keep, def.keep);
        assert_eq!(cfg.wallpaper_dir, def.wallpaper_dir);
    }

    #[test]
    fn deserialize_partial_keeps_other_defaults() {
        let cfg: WallpaperConfig = serde_json::from_str(r#"{ "keep": 0 }"#).unwrap();
        assert_eq!(cfg.keep, 0);
        assert_eq!(cfg.topics, vec![DEFAULT_TOPIC]);
    }

    #[test]
    fn unknown_keys_ignored() {
        let json = r#"{ "keep": 3, "future_section": { "key": 42 } }"#;
        let cfg: WallpaperConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.keep, 3);
    }

    #[test]
    fn load_replaces_empty_topics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallpaper.json");
        std::fs::write(&path, r#"{ "topics": [] }"#).unwrap();
        let cfg = WallpaperConfig::load(&path).unwrap();
        assert_eq!(cfg.topics, vec![DEFAULT_TOPIC]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WallpaperConfig::load(&dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn load_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallpaper.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(WallpaperConfig::load(&path).is_err());
    }

    #[test]
    fn negative_keep_is_malformed() {
        // `keep` is unsigned; a negative value rejects the whole file and the
        // caller falls back to defaults.
        assert!(serde_json::from_str::<WallpaperConfig>(r#"{ "keep": -1 }"#).is_err());
    }

    #[test]
    fn tilde_expansion() {
        let p = expand_tilde("~/Pictures");
        assert!(!p.to_string_lossy().starts_with('~'));
        assert!(p.to_string_lossy().ends_with("Pictures"));
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
