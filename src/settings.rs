use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PokerError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_hands_dir")]
    pub hands_dir: String,
    #[serde(default = "default_cards_dir")]
    pub cards_dir: String,
    /// Player name whose cards are shown first. Empty means the tournament nickname.
    #[serde(default)]
    pub hero: String,
    /// Skip malformed files instead of failing the load.
    #[serde(default)]
    pub lenient: bool,
}

fn default_hands_dir() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("pokerhist")
        .to_string_lossy()
        .to_string()
}

fn default_cards_dir() -> String {
    "./cards".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hands_dir: default_hands_dir(),
            cards_dir: default_cards_dir(),
            hero: String::new(),
            lenient: false,
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pokerhist")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Settings stored at `path`. A missing file gives the defaults quietly; an
/// unreadable or corrupt one gives them with a warning.
fn load_settings_from(path: &Path) -> Settings {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "cannot read settings, using defaults");
            return Settings::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!(file = %path.display(), error = %e, "corrupt settings, using defaults");
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| PokerError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            hands_dir: "/tmp/hands".to_string(),
            cards_dir: "/tmp/cards".to_string(),
            hero: "hero77".to_string(),
            lenient: true,
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Settings = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.hands_dir, "/tmp/hands");
        assert_eq!(loaded.hero, "hero77");
        assert!(loaded.lenient);
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(s.hero.is_empty());
        assert!(!s.lenient);
        assert_eq!(s.cards_dir, "./cards");
        assert!(s.hands_dir.ends_with("pokerhist"));
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let json = r#"{"hands_dir": "/data/hh"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.hands_dir, "/data/hh");
        assert_eq!(s.cards_dir, "./cards");
        assert!(!s.lenient);
    }

    #[test]
    fn test_corrupt_or_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert!(load_settings_from(&path).hero.is_empty());
        std::fs::write(&path, "{ not json").unwrap();
        let s = load_settings_from(&path);
        assert!(s.hero.is_empty());
        assert_eq!(s.cards_dir, "./cards");
        std::fs::write(&path, r#"{"hero": "hero77"}"#).unwrap();
        assert_eq!(load_settings_from(&path).hero, "hero77");
    }

    #[test]
    fn test_shellexpand_keeps_plain_missing_path() {
        assert_eq!(shellexpand_path("/no/such/dir"), "/no/such/dir");
    }
}
