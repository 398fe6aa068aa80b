// ABOUTME: Configuration management for glucoguide
// Key bindings and guide auto-open behavior, persisted as TOML

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version the config was written by
    #[serde(default = "default_version")]
    pub version: String,

    /// Key bindings for the guide panel
    #[serde(default)]
    pub keys: KeyBindings,

    /// Guide panel behavior
    #[serde(default)]
    pub guide: GuideConfig,
}

/// Key bindings for wiring the guide panel into the app.
///
/// Each binding is optional: an absent or unparseable binding silently
/// leaves that feature unwired. That is the contract, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Key that toggles the guide panel
    #[serde(default = "default_guide_toggle", skip_serializing_if = "Option::is_none")]
    pub guide_toggle: Option<String>,

    /// Key that closes the guide panel
    #[serde(default = "default_guide_close", skip_serializing_if = "Option::is_none")]
    pub guide_close: Option<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            guide_toggle: default_guide_toggle(),
            guide_close: default_guide_close(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Whether the guide auto-opens once on startup
    #[serde(default = "default_true")]
    pub auto_open: bool,

    /// Delay before the auto-open fires, in milliseconds
    #[serde(default = "default_auto_open_delay_ms")]
    pub auto_open_delay_ms: u64,

    /// View the guide auto-opens on (the landing view)
    #[serde(default = "default_auto_open_view")]
    pub auto_open_view: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            auto_open: default_true(),
            auto_open_delay_ms: default_auto_open_delay_ms(),
            auto_open_view: default_auto_open_view(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_guide_toggle() -> Option<String> {
    Some("?".to_string())
}

fn default_guide_close() -> Option<String> {
    Some("esc".to_string())
}

fn default_true() -> bool {
    true
}

fn default_auto_open_delay_ms() -> u64 {
    600
}

fn default_auto_open_view() -> String {
    "welcome".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            keys: KeyBindings::default(),
            guide: GuideConfig::default(),
        }
    }
}

impl AppConfig {
    /// Path to the config file under the user's home directory
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".glucoguide/config.toml"))
    }

    /// Load the config, falling back to defaults when the file is absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(config)
    }

    /// Save the config, creating parent directories as needed
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }
}

/// Parse a key binding name into a crossterm key code.
///
/// Returns None for anything unrecognized; callers treat that as an
/// unwired binding.
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    match name.to_ascii_lowercase().as_str() {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => {
                    tracing::debug!("Unrecognized key binding '{}', leaving it unwired", name);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.keys.guide_toggle.as_deref(), Some("?"));
        assert_eq!(config.keys.guide_close.as_deref(), Some("esc"));
        assert!(config.guide.auto_open);
        assert_eq!(config.guide.auto_open_delay_ms, 600);
        assert_eq!(config.guide.auto_open_view, "welcome");
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key_name("?"), Some(KeyCode::Char('?')));
        assert_eq!(parse_key_name("g"), Some(KeyCode::Char('g')));
        assert_eq!(parse_key_name("esc"), Some(KeyCode::Esc));
        assert_eq!(parse_key_name("Escape"), Some(KeyCode::Esc));
        assert_eq!(parse_key_name("enter"), Some(KeyCode::Enter));
        assert_eq!(parse_key_name(""), None);
        assert_eq!(parse_key_name("ctrl+x"), None);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.guide.auto_open_delay_ms, 600);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let mut config = AppConfig::default();
        config.keys.guide_toggle = Some("g".to_string());
        config.guide.auto_open = false;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.keys.guide_toggle.as_deref(), Some("g"));
        assert!(!loaded.guide.auto_open);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("[guide]\nauto_open_delay_ms = 50\n").unwrap();
        assert_eq!(config.guide.auto_open_delay_ms, 50);
        assert!(config.guide.auto_open);
        assert_eq!(config.keys.guide_toggle.as_deref(), Some("?"));
    }

    #[test]
    fn test_unwired_binding() {
        let config: AppConfig = toml::from_str("[keys]\nguide_toggle = \"\"\n").unwrap();
        assert_eq!(config.keys.guide_toggle.as_deref(), Some(""));
        assert_eq!(parse_key_name(""), None);
    }
}
