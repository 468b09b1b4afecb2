use shared::models::RecordId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    // The persisted file exists but cannot be parsed. Never overwritten.
    #[error("Record store '{}' is malformed: {source}", .path.display())]
    MalformedStore {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV export error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("'{field}' value {value} is out of range [{min}, {max}]")]
    InputOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown goods category: '{0}'")]
    UnknownCategory(String),

    #[error("Unsupported image file: {0}")]
    UnsupportedImage(String),

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),
}

impl EngineError {
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        EngineError::InputOutOfRange { field, value, min, max }
    }

    /// Rejected operator input, as opposed to a storage or configuration fault.
    /// The live quote hits these on nearly every keystroke.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::ValidationError(_)
                | EngineError::InputOutOfRange { .. }
                | EngineError::UnknownCategory(_)
                | EngineError::UnsupportedImage(_)
                | EngineError::RecordNotFound(_)
        )
    }

    /// Short message suitable for showing to the operator next to the form.
    pub fn operator_message(&self) -> String {
        if self.is_input_error() {
            tracing::debug!("Rejected operator input: {}", self);
        } else {
            tracing::error!("Reporting engine error to operator: {:?}", self);
        }
        match self {
            EngineError::ConfigError(msg) => format!("Configuration problem: {}", msg),
            EngineError::IoError { source } => format!("Could not access a file: {}", source),
            EngineError::MalformedStore { path, .. } => format!(
                "The data file '{}' is corrupt. Fix or move it before continuing.",
                path.display()
            ),
            EngineError::Serialization { .. } => "Could not encode the records.".to_string(),
            EngineError::CsvSystemError { source } => format!("Export failed: {}", source),
            EngineError::ValidationError(msg) => msg.clone(),
            EngineError::InputOutOfRange { field, min, max, .. } => {
                format!("{} must be between {} and {}.", field_label(field), min, max)
            }
            EngineError::UnknownCategory(name) => format!("'{}' is not a known category.", name),
            EngineError::UnsupportedImage(msg) => msg.clone(),
            EngineError::RecordNotFound(_) => "That item was already removed.".to_string(),
        }
    }
}

fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
