// Field-level checks shared by quote and submit.
use crate::error::EngineError;

/// Trims `value` and rejects it when nothing is left.
pub fn required_text(value: &str, label: &str) -> Result<String, EngineError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::ValidationError(format!("{} is required.", label)));
    }
    Ok(trimmed.to_string())
}

pub fn check_quantity(quantity: u32) -> Result<u32, EngineError> {
    if quantity < 1 {
        return Err(EngineError::out_of_range("quantity", quantity as f64, 1.0, u32::MAX as f64));
    }
    Ok(quantity)
}
