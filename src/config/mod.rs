// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language selection
//! - `[store]` - Storefront contact and featured product
//! - `[gallery]` - Magnification factor and thumbnail cap
//! - `[backend]` - Hosted database project and API key
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_VITRINE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_vitrine::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.general.language = Some("es".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedVitrine";
const CONFIG_DIR_ENV: &str = "ICED_VITRINE_CONFIG_DIR";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Storefront settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// WhatsApp number used for the inquiry deep link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,

    /// Product id shown when none is passed on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_product: Option<String>,
}

impl StoreConfig {
    /// Returns the configured WhatsApp number, falling back to the default.
    ///
    /// The number is used verbatim in the deep link; no format validation is
    /// performed beyond this substitution.
    #[must_use]
    pub fn whatsapp_number(&self) -> &str {
        self.whatsapp_number
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
    }
}

/// Gallery display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Magnification factor applied while zoomed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_factor: Option<f32>,

    /// Maximum number of thumbnails to display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_limit: Option<usize>,
}

impl GalleryConfig {
    /// Returns the zoom factor, clamped to the supported range.
    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
            .unwrap_or(DEFAULT_ZOOM_FACTOR)
            .clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR)
    }

    /// Returns the thumbnail cap, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_limit(&self) -> usize {
        self.thumbnail_limit
            .unwrap_or(THUMBNAIL_DISPLAY_LIMIT)
            .clamp(1, MAX_THUMBNAIL_DISPLAY_LIMIT)
    }
}

/// Hosted backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Hosted database project identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Identity provider web API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl BackendConfig {
    /// Whether both the project and the API key are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.project_id.as_deref().is_some_and(|p| !p.is_empty())
            && self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join(CONFIG_FILE));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("es".to_string()),
            },
            store: StoreConfig {
                whatsapp_number: Some("56912345678".to_string()),
                featured_product: Some("wooden-train".to_string()),
            },
            gallery: GalleryConfig {
                zoom_factor: Some(3.0),
                thumbnail_limit: Some(6),
            },
            backend: BackendConfig {
                project_id: Some("santis-toys".to_string()),
                api_key: Some("AIza-test".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"es\"\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.general.language.as_deref(), Some("es"));
        assert_eq!(loaded.gallery.zoom_factor(), DEFAULT_ZOOM_FACTOR);
        assert_eq!(loaded.store.whatsapp_number(), DEFAULT_WHATSAPP_NUMBER);
    }

    #[test]
    fn whatsapp_number_falls_back_when_empty() {
        let store = StoreConfig {
            whatsapp_number: Some(String::new()),
            featured_product: None,
        };
        assert_eq!(store.whatsapp_number(), DEFAULT_WHATSAPP_NUMBER);
    }

    #[test]
    fn gallery_accessors_clamp_configured_values() {
        let gallery = GalleryConfig {
            zoom_factor: Some(100.0),
            thumbnail_limit: Some(0),
        };
        assert_eq!(gallery.zoom_factor(), MAX_ZOOM_FACTOR);
        assert_eq!(gallery.thumbnail_limit(), 1);
    }

    #[test]
    fn backend_is_configured_requires_both_fields() {
        let mut backend = BackendConfig::default();
        assert!(!backend.is_configured());

        backend.project_id = Some("santis-toys".to_string());
        assert!(!backend.is_configured());

        backend.api_key = Some("AIza-test".to_string());
        assert!(backend.is_configured());
    }
}
