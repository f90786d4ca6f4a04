//! Settings file discovery and loading
//!
//! Lookup order:
//! 1. An explicit path (`--config`)
//! 2. `./.microdesigner/config.toml`
//! 3. `<config dir>/microdesigner/config.toml`
//!
//! Missing or broken files never fail startup; they fall back to defaults.

use std::path::{Path, PathBuf};

use microdesigner_core::prelude::*;

use super::types::Settings;

/// Per-directory configuration folder
pub const CONFIG_DIR: &str = ".microdesigner";

/// Settings file name inside the configuration folder
pub const CONFIG_FILENAME: &str = "config.toml";

/// Find the settings file to use, if any exists
pub fn find_settings_file(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = working_dir.join(CONFIG_DIR).join(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("microdesigner").join(CONFIG_FILENAME))
        .filter(|path| path.exists())
}

/// Load settings, falling back to defaults when nothing usable is found
#[instrument(level = "debug")]
pub fn load_settings(explicit: Option<&Path>, working_dir: &Path) -> Settings {
    let Some(path) = find_settings_file(explicit, working_dir) else {
        debug!("No config file found, using defaults");
        return Settings::default();
    };

    match read_settings(&path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("Ignoring config {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Read and parse a single settings file
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).map_err(|e| Error::config_invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    fn write_local_config(dir: &Path, content: &str) -> PathBuf {
        let config_dir = dir.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        let path = config_dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_settings_from_working_dir() {
        let temp = tempdir().unwrap();
        write_local_config(
            temp.path(),
            r#"
[ui]
icons = "nerd_fonts"
show_key_hints = false
"#,
        );

        let settings = load_settings(None, temp.path());
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(!settings.ui.show_key_hints);
    }

    #[test]
    fn test_explicit_path_wins_over_working_dir() {
        let temp = tempdir().unwrap();
        write_local_config(temp.path(), "[ui]\nmouse = false\n");

        let explicit = temp.path().join("custom.toml");
        std::fs::write(&explicit, "[behavior]\ninitial_focus = \"2\"\n").unwrap();

        let settings = load_settings(Some(&explicit), temp.path());
        assert_eq!(settings.behavior.initial_focus.as_deref(), Some("2"));
        assert!(settings.ui.mouse);
    }

    #[test]
    fn test_missing_explicit_path_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.toml");

        let settings = load_settings(Some(&missing), temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        write_local_config(temp.path(), "[ui\nicons = ");

        let settings = load_settings(None, temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_read_settings_reports_invalid_config() {
        let temp = tempdir().unwrap();
        let path = write_local_config(temp.path(), "[ui]\nicons = 3\n");

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_read_settings_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_settings(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_find_settings_file_prefers_local() {
        let temp = tempdir().unwrap();
        let path = write_local_config(temp.path(), "");
        assert_eq!(find_settings_file(None, temp.path()), Some(path));
    }
}
