use crate::error::{ConfigError, Result};
use crate::state::{NormalizerSettings, TransitionTiming};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub input: InputConfig,
    pub transition: TransitionConfig,
    pub nav: NavConfig,
    pub catalog: CatalogConfig,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
}

/// Wheel, touch and keyboard input tuning
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Accumulated wheel delta needed to change section
    pub wheel_threshold: f32,
    /// Minimum time between two wheel-triggered changes (ms)
    pub debounce_ms: u64,
    /// Minimum vertical swipe distance (points)
    pub touch_threshold: f32,
    pub enable_keyboard: bool,
    pub enable_touch: bool,
}

/// Section transition timing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TransitionConfig {
    /// Length of the section rotation (ms)
    pub duration_ms: u64,
    /// Delay before the incoming section starts (ms)
    pub enter_delay_ms: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RailPosition {
    Left,
    #[default]
    Right,
}

/// Nav dot rail configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    pub position: RailPosition,
    /// Show section titles next to the dots on hover
    pub show_labels: bool,
    /// Hide the rail after this many idle seconds, 0 keeps it visible
    pub auto_hide_secs: u64,
}

/// Shop page configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Upper end of the price filter (yen)
    pub max_price: u32,
    /// Price slider step (yen)
    pub price_step: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            wheel_threshold: 50.0,
            debounce_ms: 150,
            touch_threshold: 50.0,
            enable_keyboard: true,
            enable_touch: true,
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        TransitionConfig {
            duration_ms: 800,
            enter_delay_ms: 100,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            position: RailPosition::Right,
            show_labels: true,
            auto_hide_secs: 3,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            max_price: 100_000,
            price_step: 1_000,
        }
    }
}

impl InputConfig {
    pub fn normalizer_settings(&self) -> NormalizerSettings {
        NormalizerSettings {
            wheel_threshold: self.wheel_threshold,
            debounce: Duration::from_millis(self.debounce_ms),
            touch_threshold: self.touch_threshold,
            enable_keyboard: self.enable_keyboard,
            enable_touch: self.enable_touch,
        }
    }
}

impl TransitionConfig {
    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming {
            duration: Duration::from_millis(self.duration_ms),
            enter_delay: Duration::from_millis(self.enter_delay_ms),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "snapdeck")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
            info!(path = %path.display(), "wrote default config");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.input.wheel_threshold, 50.0);
        assert_eq!(config.input.debounce_ms, 150);
        assert_eq!(config.input.touch_threshold, 50.0);
        assert_eq!(config.transition.duration_ms, 800);
        assert_eq!(config.nav.position, RailPosition::Right);
        assert_eq!(config.catalog.max_price, 100_000);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml_str = r#"
            [theme]
            mode = "light"

            [input]
            debounce_ms = 300
        "#;
        let config: Config = toml::from_str(toml_str).expect("Failed to parse");
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.input.debounce_ms, 300);
        assert_eq!(config.input.wheel_threshold, 50.0);
        assert!(config.input.enable_touch);
        assert_eq!(config.transition, TransitionConfig::default());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let result: std::result::Result<Config, _> = toml::from_str("[nav]\nposition = \"top\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.nav.position = RailPosition::Left;
        config.transition.duration_ms = 600;
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_runtime_settings() {
        let config = Config::default();
        let settings = config.input.normalizer_settings();
        assert_eq!(settings.debounce, Duration::from_millis(150));
        assert_eq!(config.transition.timing(), TransitionTiming::default());
    }
}
