// Customs valuation: category default percent, operator override, valued price.
use crate::config::{CategoryRate, EngineSettings};
use crate::error::EngineError;

/// Immutable category -> default percent lookup, supplied at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationTable {
    rates: Vec<CategoryRate>,
}

/// Result of valuing one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub category: String,
    pub default_percent: f64,
    pub percent: f64,
    pub original_price: f64,
    pub valued_price: f64,
}

impl ValuationTable {
    pub fn new(rates: Vec<CategoryRate>) -> Self {
        Self { rates }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(settings.valuation_table.clone())
    }

    /// Category names in table order.
    pub fn categories(&self) -> Vec<String> {
        self.rates.iter().map(|r| r.category.clone()).collect()
    }

    pub fn rates(&self) -> &[CategoryRate] {
        &self.rates
    }

    // Lookup ignores case; the canonical spelling comes from the table.
    fn lookup(&self, category: &str) -> Result<&CategoryRate, EngineError> {
        let wanted = category.trim();
        self.rates
            .iter()
            .find(|r| r.category.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownCategory(wanted.to_string()))
    }

    pub fn default_percent(&self, category: &str) -> Result<f64, EngineError> {
        self.lookup(category).map(|r| r.default_percent)
    }

    /// Values `original_price` under `category`, using `override_percent`
    /// instead of the category default when given.
    pub fn appraise(
        &self,
        category: &str,
        original_price: f64,
        override_percent: Option<f64>,
    ) -> Result<Valuation, EngineError> {
        let rate = self.lookup(category)?;
        if !original_price.is_finite() || original_price < 0.0 {
            return Err(EngineError::out_of_range("original_price", original_price, 0.0, f64::MAX));
        }
        let percent = override_percent.unwrap_or(rate.default_percent);
        if !(0.0..=100.0).contains(&percent) {
            return Err(EngineError::out_of_range("valuation_percent", percent, 0.0, 100.0));
        }

        Ok(Valuation {
            category: rate.category.clone(),
            default_percent: rate.default_percent,
            percent,
            original_price,
            valued_price: valued_price(original_price, percent),
        })
    }
}

impl Default for ValuationTable {
    fn default() -> Self {
        Self::from_settings(&EngineSettings::default())
    }
}

/// `original_price * percent / 100` at full precision. Rounding is for display only.
pub fn valued_price(original_price: f64, percent: f64) -> f64 {
    original_price * percent / 100.0
}
