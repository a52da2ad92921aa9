use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::view::{DEFAULT_CITY, Theme, ViewState};

/// Display preferences stored on disk. The forecast request itself is not configurable.
///
/// Example TOML:
/// city = "Rivne, UA"
/// theme = "night"
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Label shown at the top of the screen.
    pub city: Option<String>,

    /// Theme the screen starts in.
    pub theme: Option<Theme>,
}

impl Config {
    pub fn city_or_default(&self) -> &str {
        self.city.as_deref().filter(|c| !c.trim().is_empty()).unwrap_or(DEFAULT_CITY)
    }

    pub fn theme_or_default(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    /// Initial screen state for these preferences.
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.city_or_default(), self.theme_or_default())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skyview", "skyview")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.city_or_default(), "Rivne, UA");
        assert_eq!(cfg.theme_or_default(), Theme::Day);
    }

    #[test]
    fn blank_city_falls_back_to_default() {
        let cfg = Config { city: Some("   ".into()), theme: None };
        assert_eq!(cfg.city_or_default(), "Rivne, UA");
    }

    #[test]
    fn initial_view_uses_preferences() {
        let cfg = Config { city: Some("Lviv, UA".into()), theme: Some(Theme::Night) };
        let view = cfg.initial_view();
        assert_eq!(view.city, "Lviv, UA");
        assert_eq!(view.theme, Theme::Night);
        assert!(view.forecast.is_empty());
    }

    #[test]
    fn parses_toml() {
        let cfg: Config = toml::from_str("city = \"Kyiv, UA\"\ntheme = \"night\"\n").unwrap();
        assert_eq!(cfg.city.as_deref(), Some("Kyiv, UA"));
        assert_eq!(cfg.theme, Some(Theme::Night));

        let err = toml::from_str::<Config>("theme = \"dusk\"").unwrap_err();
        assert!(err.to_string().contains("dusk"));
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config { city: Some("Rivne".into()), theme: Some(Theme::Night) };
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn broken_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "city = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
