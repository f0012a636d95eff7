use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AlcanciaError, Result};

pub const DEFAULT_ADVISOR_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ADVISOR_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    #[serde(default = "default_advisor_model")]
    pub advisor_model: String,
    #[serde(default = "default_advisor_base_url")]
    pub advisor_base_url: String,
}

fn default_advisor_model() -> String {
    DEFAULT_ADVISOR_MODEL.to_string()
}

fn default_advisor_base_url() -> String {
    DEFAULT_ADVISOR_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            advisor_model: default_advisor_model(),
            advisor_base_url: default_advisor_base_url(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("alcancia")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("alcancia")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| AlcanciaError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

/// Resolve the data directory. `ALCANCIA_DATA_DIR` overrides the settings
/// file (integration tests rely on this).
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ALCANCIA_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(&load_settings().data_dir)
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
            data_dir: "/tmp/test".to_string(),
            advisor_model: "gemini-2.5-pro".to_string(),
            advisor_base_url: DEFAULT_ADVISOR_BASE_URL.to_string(),
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(&path, &json).unwrap();
        let loaded: Settings = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.data_dir, "/tmp/test");
        assert_eq!(loaded.advisor_model, "gemini-2.5-pro");
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(!s.data_dir.is_empty());
        assert_eq!(s.advisor_model, DEFAULT_ADVISOR_MODEL);
        assert!(s.advisor_base_url.starts_with("https://"));
    }

    #[test]
    fn test_partial_settings_merge_with_defaults() {
        let json = r#"{"data_dir": "/tmp/test"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.data_dir, "/tmp/test");
        assert_eq!(s.advisor_model, DEFAULT_ADVISOR_MODEL);
    }
}
