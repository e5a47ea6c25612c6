//! Gallery Settings
//!
//! Persisted in `dfc-select.toml` under the platform config directory. Every
//! field is optional; missing values fall back to the component defaults.

use std::path::PathBuf;
use std::time::Duration;

use gpui::App;
use gpui_component::ThemeMode;
use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{DEFAULT_FETCH_DELAY_MS, DEFAULT_MAX_COUNT, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use crate::states::clamp_animation;

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("dfc-select.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted gallery settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    locale: Option<String>,
    theme: Option<String>,
    max_count: Option<usize>,
    animation: Option<f32>,
    modal_popover: Option<bool>,
    page_size: Option<usize>,
    fetch_delay_ms: Option<u64>,
}

impl GalleryConfig {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        let mut config = Self::parse(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if config.locale.as_ref().is_none_or(|l| l.is_empty()) {
            let system = SystemLocale::current().to_string();
            let lang = system.split_once('-').map_or(system.as_str(), |(lang, _)| lang);
            if !lang.is_empty() {
                config.locale = Some(lang.to_string());
            }
        }

        Ok(config)
    }

    /// Parse settings; an empty document yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        if config.page_size == Some(0) {
            return Err(Error::Invalid {
                message: "page_size must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    /// Write settings to the config file
    pub fn save(&self) -> Result<()> {
        let path = get_config_path()?;
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    /// Persist a snapshot in the background
    pub fn save_in_background(&self, cx: &App, action_name: &'static str) {
        let config = self.clone();
        cx.background_executor()
            .spawn(async move {
                if let Err(e) = config.save() {
                    error!(error = %e, action = action_name, "Failed to save config");
                } else {
                    info!(action = action_name, "Config saved");
                }
            })
            .detach();
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> Locale {
        self.locale.as_deref().map(Locale::from_code).unwrap_or_default()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn max_count(&self) -> usize {
        self.max_count.unwrap_or(DEFAULT_MAX_COUNT)
    }

    /// Badge pulse period in seconds
    pub fn animation(&self) -> f32 {
        self.animation.map(clamp_animation).unwrap_or(0.0)
    }

    pub fn modal_popover(&self) -> bool {
        self.modal_popover.unwrap_or(false)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    /// Simulated latency of one page fetch
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms.unwrap_or(DEFAULT_FETCH_DELAY_MS))
    }

    // ==================== Setters ====================

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale.code().to_string());
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_modal_popover(&mut self, modal: bool) {
        self.modal_popover = Some(modal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = GalleryConfig::parse("  \n").expect("empty config parses");
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.max_count(), DEFAULT_MAX_COUNT);
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(config.fetch_delay(), Duration::from_millis(DEFAULT_FETCH_DELAY_MS));
        assert!(!config.modal_popover());
        assert_eq!(config.theme(), None);
        assert_eq!(config.locale(), Locale::EnUS);
    }

    #[test]
    fn test_parse_fields() {
        let config = GalleryConfig::parse(
            r#"
locale = "zh"
theme = "dark"
max_count = 5
animation = 2.5
modal_popover = true
page_size = 10
fetch_delay_ms = 50
"#,
        )
        .expect("config parses");

        assert_eq!(config.locale(), Locale::ZhCN);
        assert_eq!(config.theme(), Some(ThemeMode::Dark));
        assert_eq!(config.max_count(), 5);
        assert_eq!(config.animation(), 2.5);
        assert!(config.modal_popover());
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.fetch_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_unbounded_animation_is_disabled_or_capped() {
        let config = GalleryConfig::parse("animation = inf").expect("inf is valid TOML");
        assert_eq!(config.animation(), 0.0);

        let config = GalleryConfig::parse("animation = nan").expect("nan is valid TOML");
        assert_eq!(config.animation(), 0.0);

        let config = GalleryConfig::parse("animation = 1e30").expect("config parses");
        assert_eq!(config.animation(), crate::constants::MAX_ANIMATION_SECS);
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(
            GalleryConfig::parse("page_size = 0"),
            Err(Error::Invalid { .. })
        ));
        assert!(matches!(
            GalleryConfig::parse("max_count = \"three\""),
            Err(Error::TomlDe { .. })
        ));
    }

    #[test]
    fn test_setters_round_through_toml() {
        let mut config = GalleryConfig::default();
        config.set_locale(Locale::ZhCN);
        config.set_theme(Some(ThemeMode::Light));
        config.set_modal_popover(true);

        let text = toml::to_string(&config).expect("config serializes");
        let parsed = GalleryConfig::parse(&text).expect("config parses");
        assert_eq!(parsed, config);
        assert_eq!(parsed.theme(), Some(ThemeMode::Light));
    }
}
