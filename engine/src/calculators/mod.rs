// Pure pricing calculators used by the intake service.
pub mod scf;
pub mod valuation;

pub use scf::{ScfTerms, DAYS_PER_YEAR};
pub use valuation::{Valuation, ValuationTable};

/// Slack allowed when comparing against computed ceilings, so an amount typed
/// to match the displayed cap is not rejected over float noise.
pub(crate) const CEILING_TOLERANCE: f64 = 1e-9;
