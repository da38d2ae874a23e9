use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Blog service connection
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ApiConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    fn default_base_url() -> String {
        "http://localhost:3003".to_string()
    }

    fn default_timeout_secs() -> u64 {
        10
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "NotificationConfig::default_timeout_ms")]
    pub timeout_ms: u64,
}

impl NotificationConfig {
    fn default_timeout_ms() -> u64 {
        crate::core::state::notification::DEFAULT_TIMEOUT_MS
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: Self::default_timeout_ms(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Config {
    /// Loads the user config from the config directory on top of the
    /// embedded defaults
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// The embedded defaults alone
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?
            .set_default("api.base_url", default_config.api.base_url.as_str())?
            .set_default("api.timeout_secs", default_config.api.timeout_secs)?
            .set_default(
                "notification.timeout_ms",
                default_config.notification.timeout_ms,
            )?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        Ok(cfg)
    }

    /// Applies command line overrides
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::config::keybindings::{parse_key_sequence, Action};
    use pretty_assertions::assert_eq;

    fn keys(raw: &str) -> Vec<crossterm::event::KeyEvent> {
        parse_key_sequence(raw).unwrap_or_default()
    }

    #[test]
    fn test_defaults_parse() -> Result<(), ConfigError> {
        let cfg = Config::defaults()?;

        assert_eq!(cfg.api.base_url, "http://localhost:3003");
        assert_eq!(cfg.notification.timeout_ms, 5000);
        assert_eq!(cfg.keybindings.get(&keys("<q>")), Some(&Action::Quit));
        assert_eq!(cfg.keybindings.get(&keys("</>")), Some(&Action::Filter));
        assert!(cfg.styles.contains_key("error"));
        Ok(())
    }

    #[test]
    fn test_missing_user_file_falls_back_to_defaults() -> color_eyre::Result<()> {
        let dir = tempfile::tempdir()?;

        let cfg = Config::load_from(dir.path(), dir.path())?;

        assert_eq!(cfg.api.timeout_secs, 10);
        assert_eq!(cfg.keybindings.get(&keys("<l>")), Some(&Action::Like));
        assert_eq!(cfg.config._config_dir, dir.path());
        Ok(())
    }

    #[test]
    fn test_user_file_overrides_and_merges() -> color_eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("config.json5"),
            r#"{
                api: { base_url: "https://blogs.example.com" },
                keybindings: { "<x>": "Delete" },
            }"#,
        )?;

        let cfg = Config::load_from(dir.path(), dir.path())?;

        assert_eq!(cfg.api.base_url, "https://blogs.example.com");
        assert_eq!(cfg.api.timeout_secs, 10);
        assert_eq!(cfg.keybindings.get(&keys("<x>")), Some(&Action::Delete));
        // Defaults are still present
        assert_eq!(cfg.keybindings.get(&keys("<d>")), Some(&Action::Delete));
        Ok(())
    }

    #[test]
    fn test_api_url_override() -> Result<(), ConfigError> {
        let cfg = Config::defaults()?.with_api_url(Some("http://127.0.0.1:9".into()));
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:9");
        Ok(())
    }
}
