// Engine settings, loaded from a JSON file or taken from defaults.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::EngineError;

/// Default valuation percent for one goods category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRate {
    pub category: String,
    pub default_percent: f64,
}

impl CategoryRate {
    pub fn new(category: &str, default_percent: f64) -> Self {
        Self { category: category.to_string(), default_percent }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub data_file: PathBuf,
    pub uploads_dir: PathBuf,
    /// Share of the valued price that may be financed.
    pub scf_cap_ratio: f64,
    pub max_scf_days: u32,
    pub allowed_image_extensions: Vec<String>,
    pub valuation_table: Vec<CategoryRate>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            data_file: PathBuf::from("dge_goods_data.json"),
            uploads_dir: PathBuf::from("uploads"),
            scf_cap_ratio: 0.6,
            max_scf_days: 365,
            allowed_image_extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            valuation_table: vec![
                CategoryRate::new("Electronics", 50.0),
                CategoryRate::new("Machinery", 60.0),
                CategoryRate::new("Textiles", 40.0),
                CategoryRate::new("Food & Perishables", 20.0),
                CategoryRate::new("Chemicals", 30.0),
                CategoryRate::new("Furniture", 45.0),
                CategoryRate::new("Other", 25.0),
            ],
        }
    }
}

impl EngineSettings {
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let settings: EngineSettings = serde_json::from_str(&raw).map_err(|e| {
            EngineError::ConfigError(format!("cannot parse '{}': {}", path.display(), e))
        })?;
        settings.validate()?;
        tracing::info!(path = %path.display(), categories = settings.valuation_table.len(), "Loaded engine settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.valuation_table.is_empty() {
            return Err(EngineError::ConfigError("valuation table is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for rate in &self.valuation_table {
            if rate.category.trim().is_empty() {
                return Err(EngineError::ConfigError("valuation table has a blank category".to_string()));
            }
            if !seen.insert(rate.category.to_lowercase()) {
                return Err(EngineError::ConfigError(format!("duplicate category '{}'", rate.category)));
            }
            if !(0.0..=100.0).contains(&rate.default_percent) {
                return Err(EngineError::ConfigError(format!(
                    "default percent {} for '{}' is outside [0, 100]",
                    rate.default_percent, rate.category
                )));
            }
        }
        if !(self.scf_cap_ratio > 0.0 && self.scf_cap_ratio <= 1.0) {
            return Err(EngineError::ConfigError(format!(
                "scf_cap_ratio {} must be in (0, 1]",
                self.scf_cap_ratio
            )));
        }
        if self.max_scf_days < 1 {
            return Err(EngineError::ConfigError("max_scf_days must be at least 1".to_string()));
        }
        if self.allowed_image_extensions.is_empty() {
            return Err(EngineError::ConfigError("no image extensions allowed".to_string()));
        }
        Ok(())
    }

    /// Creates the data file's directory and the uploads directory if missing.
    pub fn ensure_directories(&self) -> Result<(), EngineError> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::create_dir_all(&self.uploads_dir)?;
        tracing::debug!(data_file = %self.data_file.display(), uploads_dir = %self.uploads_dir.display(), "Working directories ready");
        Ok(())
    }

    /// Settings rooted in `dir`, used for tests and portable installs.
    pub fn rooted_at(dir: &Path) -> Self {
        EngineSettings {
            data_file: dir.join("dge_goods_data.json"),
            uploads_dir: dir.join("uploads"),
            ..EngineSettings::default()
        }
    }
}
