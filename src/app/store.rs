use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::config::StyleConfig;
use super::error::{AppError, Result};
use super::paths;

/// CRUD over the style configs on disk, one JSON document per config.
///
/// No locking: this is a single-user desktop tool and concurrent external
/// edits of the styles directory are not guarded against.
#[derive(Clone)]
pub struct ConfigStore {
    styles_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(styles_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&styles_dir)?;
        Ok(Self { styles_dir })
    }

    /// Store rooted at the default data directory.
    pub fn open_default() -> Result<Self> {
        Self::new(paths::styles_dir())
    }

    pub fn styles_dir(&self) -> &Path {
        &self.styles_dir
    }

    fn config_path(&self, name: &str) -> PathBuf {
        self.styles_dir
            .join(format!("{}.json", paths::sanitize_filename(name)))
    }

    /// Names of all readable configs, sorted. Malformed or unreadable files
    /// are skipped; listing never fails.
    pub fn list(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.styles_dir) else {
            return Vec::new();
        };

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match read_config(&path) {
                Ok(config) => names.push(config.name),
                Err(e) => {
                    warn!("skipping unreadable config {}: {}", path.display(), e);
                }
            }
        }
        names.sort();
        names
    }

    pub fn load(&self, name: &str) -> Result<StyleConfig> {
        let path = self.config_path(name);
        if !path.is_file() {
            return Err(AppError::ConfigNotFound {
                name: name.to_string(),
            });
        }
        read_config(&path)
    }

    /// Save a config, overwriting any existing file of the same name.
    /// Every pattern must compile (checked before anything is written).
    pub fn save(&self, config: &StyleConfig) -> Result<()> {
        if config.name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }
        config.validate_patterns()?;

        fs::create_dir_all(&self.styles_dir)?;
        let path = self.config_path(&config.name);
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&path, json)?;
        info!("saved config \"{}\" ({} rules)", config.name, config.rules.len());
        Ok(())
    }

    /// Save after an edit that may have renamed the config. The new document
    /// is written first; only then is the old file removed.
    pub fn save_renamed(&self, config: &StyleConfig, old_name: Option<&str>) -> Result<()> {
        self.save(config)?;

        if let Some(old) = old_name {
            if old != config.name {
                let old_path = self.config_path(old);
                if old_path.is_file() {
                    if let Err(e) = fs::remove_file(&old_path) {
                        warn!("could not remove renamed config \"{}\": {}", old, e);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.config_path(name);
        if !path.is_file() {
            return Err(AppError::ConfigNotFound {
                name: name.to_string(),
            });
        }
        fs::remove_file(&path)?;
        info!("deleted config \"{}\"", name);
        Ok(())
    }

    /// Copy a config document out of the store.
    pub fn export(&self, name: &str, dest: &Path) -> Result<()> {
        let config = self.load(name)?;
        let json = serde_json::to_string_pretty(&config)?;
        fs::write(dest, json)?;
        info!("exported config \"{}\" to {}", name, dest.display());
        Ok(())
    }

    /// Import a config document. Fails with `ConfigExists` when a config of
    /// the same name is already present and `overwrite` is false. Returns the
    /// imported config's name.
    pub fn import(&self, src: &Path, overwrite: bool) -> Result<String> {
        let config = read_config(src)?;
        config.validate_patterns()?;
        if config.name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }

        if !overwrite && self.config_path(&config.name).is_file() {
            return Err(AppError::ConfigExists {
                name: config.name,
            });
        }

        self.save(&config)?;
        Ok(config.name)
    }
}

fn read_config(path: &Path) -> Result<StyleConfig> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| AppError::ConfigParse {
        name: path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::StyleRule;
    use tempfile::TempDir;

    fn store() -> (TempDir, ConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join("styles")).unwrap();
        (dir, store)
    }

    fn sample(name: &str) -> StyleConfig {
        StyleConfig::new(
            name,
            vec![
                StyleRule::new("^road.*", "/styles/road.qml"),
                StyleRule::new("water|lake", "/styles/water.qml"),
            ],
        )
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (_dir, store) = store();
        let config = sample("base map");
        store.save(&config).unwrap();

        let loaded = store.load("base map").unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (_dir, store) = store();
        let err = store.load("nope").unwrap_err();
        assert!(matches!(err, AppError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let (_dir, store) = store();
        fs::write(store.styles_dir().join("bad.json"), "{not json").unwrap();
        let err = store.load("bad").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }

    #[test]
    fn test_save_rejects_invalid_pattern() {
        let (_dir, store) = store();
        let config = StyleConfig::new("bad", vec![StyleRule::new("^road[", "r.qml")]);
        let err = store.save(&config).unwrap_err();
        assert!(matches!(err, AppError::InvalidPattern { .. }));
        // Nothing was written.
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_save_rejects_empty_name() {
        let (_dir, store) = store();
        let config = StyleConfig::new("   ", vec![]);
        assert!(matches!(store.save(&config), Err(AppError::EmptyName)));
    }

    #[test]
    fn test_list_sorted_and_skips_malformed() {
        let (_dir, store) = store();
        store.save(&sample("zebra")).unwrap();
        store.save(&sample("alpha")).unwrap();
        fs::write(store.styles_dir().join("junk.json"), "oops").unwrap();
        fs::write(store.styles_dir().join("notes.txt"), "ignored").unwrap();

        assert_eq!(store.list(), vec!["alpha", "zebra"]);
    }

    #[test]
    fn test_delete_removes_file_and_listing() {
        let (_dir, store) = store();
        store.save(&sample("gone")).unwrap();
        assert_eq!(store.list(), vec!["gone"]);

        store.delete("gone").unwrap();
        assert!(store.list().is_empty());
        assert!(matches!(
            store.delete("gone"),
            Err(AppError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_sanitized_name_round_trips() {
        let (_dir, store) = store();
        let config = sample("roads: primary/secondary");
        store.save(&config).unwrap();

        // The filename is sanitized but the listing shows the real name.
        assert_eq!(store.list(), vec!["roads: primary/secondary"]);
        let loaded = store.load("roads: primary/secondary").unwrap();
        assert_eq!(loaded.name, "roads: primary/secondary");
    }

    #[test]
    fn test_overwrite_same_name() {
        let (_dir, store) = store();
        store.save(&sample("one")).unwrap();

        let replacement = StyleConfig::new("one", vec![StyleRule::new("^x", "x.qml")]);
        store.save(&replacement).unwrap();

        let loaded = store.load("one").unwrap();
        assert_eq!(loaded.rules.len(), 1);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_save_renamed_drops_old_file() {
        let (_dir, store) = store();
        store.save(&sample("old name")).unwrap();

        let mut config = store.load("old name").unwrap();
        config.name = "new name".to_string();
        store.save_renamed(&config, Some("old name")).unwrap();

        assert_eq!(store.list(), vec!["new name"]);
        assert!(matches!(
            store.load("old name"),
            Err(AppError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_export_import_round_trip() {
        let (dir, store) = store();
        let config = sample("shared");
        store.save(&config).unwrap();

        let exported = dir.path().join("shared.json");
        store.export("shared", &exported).unwrap();

        store.delete("shared").unwrap();
        let name = store.import(&exported, false).unwrap();
        assert_eq!(name, "shared");
        assert_eq!(store.load("shared").unwrap(), config);
    }

    #[test]
    fn test_import_collision_requires_overwrite() {
        let (dir, store) = store();
        store.save(&sample("dup")).unwrap();

        let exported = dir.path().join("dup.json");
        store.export("dup", &exported).unwrap();

        let err = store.import(&exported, false).unwrap_err();
        assert!(matches!(err, AppError::ConfigExists { .. }));
        assert!(store.import(&exported, true).is_ok());
    }

    #[test]
    fn test_import_rejects_bad_patterns() {
        let (dir, store) = store();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"name": "bad", "rules": [["^x[", "x.qml"]]}"#).unwrap();
        let err = store.import(&path, false).unwrap_err();
        assert!(matches!(err, AppError::InvalidPattern { .. }));
    }
}
