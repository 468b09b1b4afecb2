// GUI configuration: window/app settings plus the engine settings block.
pub mod theme;

use anyhow::{Context, Result};
use engine::config::EngineSettings;
use serde::Deserialize;
use std::path::Path;

use crate::state::app_state::Theme;

/// Operator override, read from the working directory when present.
pub const USER_CONFIG_FILE: &str = "goods_intake.json";

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub engine: EngineSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub theme: String, // "dark" or "light"
    pub window_width: u32,
    pub window_height: u32,
    pub export_file_name: String,
}

impl AppConfig {
    /// The configuration embedded in the binary.
    pub fn load_default() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG).context("embedded default configuration is invalid")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read configuration file '{}'", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid configuration file '{}'", path.display()))
    }

    /// Uses the operator override file when it exists, the embedded default otherwise.
    pub fn load() -> Result<Self> {
        let user_file = Path::new(USER_CONFIG_FILE);
        if user_file.exists() {
            tracing::info!(path = %user_file.display(), "Using operator configuration file");
            Self::load_from(user_file)
        } else {
            Self::load_default()
        }
    }

    fn parse(raw: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(raw)?;
        config.engine.validate()?;
        Ok(config)
    }

    pub fn theme(&self) -> Theme {
        match self.app.theme.to_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}
