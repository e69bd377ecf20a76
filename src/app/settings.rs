use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::AppError;
use super::i18n::{detect_system_language, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LanguageChoice {
    #[default]
    System,
    English,
    Chinese,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub language: LanguageChoice,

    #[serde(default = "default_auto_check_updates")]
    pub auto_check_updates: bool,

    #[serde(default)]
    pub last_update_check: i64,

    #[serde(default)]
    pub skipped_versions: Vec<String>,

    #[serde(default)]
    pub last_config: Option<String>,

    #[serde(default)]
    pub last_project_dir: Option<String>,
}

fn default_auto_check_updates() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: LanguageChoice::System,
            auto_check_updates: default_auto_check_updates(),
            last_update_check: 0,
            skipped_versions: Vec::new(),
            last_config: None,
            last_project_dir: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("autostyle");
        path.push("settings.json");
        path
    }

    /// UI language: explicit choice, or whatever the system locale implies.
    pub fn effective_language(&self) -> Language {
        match self.language {
            LanguageChoice::System => detect_system_language(),
            LanguageChoice::English => Language::English,
            LanguageChoice::Chinese => Language::Chinese,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.language, LanguageChoice::System);
        assert!(settings.auto_check_updates);
        assert_eq!(settings.last_update_check, 0);
        assert!(settings.skipped_versions.is_empty());
        assert!(settings.last_config.is_none());
        assert!(settings.last_project_dir.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"auto_check_updates": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.auto_check_updates); // Should use file value
        assert_eq!(settings.language, LanguageChoice::System); // Should use default
    }

    #[test]
    fn test_language_choice_serialization() {
        let settings = AppSettings {
            language: LanguageChoice::Chinese,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Chinese\""));
    }

    #[test]
    fn test_explicit_language_wins() {
        let settings = AppSettings {
            language: LanguageChoice::Chinese,
            ..Default::default()
        };
        assert_eq!(settings.effective_language(), Language::Chinese);

        let settings = AppSettings {
            language: LanguageChoice::English,
            ..Default::default()
        };
        assert_eq!(settings.effective_language(), Language::English);
    }

    #[test]
    fn test_state_fields_round_trip() {
        let settings = AppSettings {
            last_update_check: 1234567890,
            skipped_versions: vec!["1.4.0".to_string()],
            last_config: Some("base map".to_string()),
            last_project_dir: Some("/data/project".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.last_update_check, 1234567890);
        assert_eq!(loaded.skipped_versions, vec!["1.4.0".to_string()]);
        assert_eq!(loaded.last_config.as_deref(), Some("base map"));
        assert_eq!(loaded.last_project_dir.as_deref(), Some("/data/project"));
    }
}
