use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration, loaded from `~/.config/quill/config.toml`.
///
/// The file is optional; every field has a default. The API key is
/// deliberately NOT configurable here - it comes from the environment only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeVariant,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    #[serde(rename = "high-contrast")]
    HighContrast,
}

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Gemini model used for all three writing tasks
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-04-17".to_string()
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("quill");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path.parent().unwrap();

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.theme, ThemeVariant::Dark);
        assert_eq!(config.ai.model, default_model());
    }

    #[test]
    fn model_override_is_honored() {
        let toml = r#"
            [ai]
            model = "gemini-2.0-pro"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.ai.model, "gemini-2.0-pro");
        // Untouched sections keep their defaults
        assert_eq!(config.ui.theme, ThemeVariant::Dark);
    }

    #[test]
    fn high_contrast_theme_parses() {
        let toml = r#"
            [ui]
            theme = "high-contrast"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.ui.theme, ThemeVariant::HighContrast);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config {
            ui: UiConfig {
                theme: ThemeVariant::HighContrast,
            },
            ai: AiConfig {
                model: "gemini-2.0-pro".to_string(),
            },
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.ui.theme, config.ui.theme);
        assert_eq!(parsed.ai.model, config.ai.model);
    }
}
