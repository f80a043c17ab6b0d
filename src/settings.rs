use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::codes::GoalSuffix;
use crate::error::{CodeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Name used for category codes when none is given.
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Name used for goal codes when none is given.
    #[serde(default = "default_goal")]
    pub default_goal: String,
    #[serde(default)]
    pub goal_suffix: GoalSuffix,
}

fn default_category() -> String {
    "Food & Drinks".to_string()
}

fn default_goal() -> String {
    "Emergency Fund".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            default_goal: default_goal(),
            goal_suffix: GoalSuffix::default(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("fincodes")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Missing or unreadable files fall back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No settings at {}, using defaults", path.display());
        return Settings::default();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read {}: {e}", path.display());
            return Settings::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!("Ignoring malformed settings in {}: {e}", path.display());
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| CodeError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    debug!("Saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            default_category: "Groceries".to_string(),
            default_goal: "New Laptop".to_string(),
            goal_suffix: GoalSuffix::Full,
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_load_returns_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings_from(&dir.path().join("nope.json"));
        assert_eq!(s.default_category, "Food & Drinks");
        assert_eq!(s.default_goal, "Emergency Fund");
        assert_eq!(s.goal_suffix, GoalSuffix::Trailing);
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let json = r#"{"default_goal": "Vacation"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.default_goal, "Vacation");
        assert_eq!(s.default_category, "Food & Drinks");
        assert_eq!(s.goal_suffix, GoalSuffix::Trailing);
    }

    #[test]
    fn test_goal_suffix_serializes_lowercase() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains(r#""goal_suffix":"trailing""#));
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn test_save_creates_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("nested").join("settings.json");
        save_settings_to(&path, &Settings::default()).unwrap();
        assert!(path.exists());
    }
}
