// Supply-chain-finance calculator: cap, simple daily interest, repayment.
use shared::models::ScfDetails;

use super::CEILING_TOLERANCE;
use crate::error::EngineError;

/// Day count convention for interest: actual days over a 365-day year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Financing terms as entered by the operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScfTerms {
    pub amount: f64,
    /// Percent per annum.
    pub interest_rate: f64,
    pub days: u32,
}

/// Largest amount that may be financed against `valued_price`.
pub fn max_scf_amount(valued_price: f64, cap_ratio: f64) -> f64 {
    valued_price * cap_ratio
}

/// Simple (non-compounding) interest: `amount * rate * days / (365 * 100)`.
pub fn interest_payable(amount: f64, interest_rate: f64, days: u32) -> f64 {
    amount * interest_rate * days as f64 / (DAYS_PER_YEAR * 100.0)
}

/// Checks `terms` against the cap and input limits and computes the derived figures.
pub fn finance(
    valued_price: f64,
    terms: ScfTerms,
    cap_ratio: f64,
    max_days: u32,
) -> Result<ScfDetails, EngineError> {
    let cap = max_scf_amount(valued_price, cap_ratio);
    if !terms.amount.is_finite() || terms.amount < 0.0 || terms.amount > cap + CEILING_TOLERANCE {
        return Err(EngineError::out_of_range("scf_amount", terms.amount, 0.0, cap));
    }
    if !(0.0..=100.0).contains(&terms.interest_rate) {
        return Err(EngineError::out_of_range("scf_interest_rate", terms.interest_rate, 0.0, 100.0));
    }
    if terms.days < 1 || terms.days > max_days {
        return Err(EngineError::out_of_range("scf_days", terms.days as f64, 1.0, max_days as f64));
    }

    // Within tolerance of the cap counts as the cap itself.
    let amount = terms.amount.min(cap);
    let interest = interest_payable(amount, terms.interest_rate, terms.days);
    Ok(ScfDetails {
        amount,
        interest_rate: terms.interest_rate,
        days: terms.days,
        interest_payable: interest,
        total_repayment: amount + interest,
    })
}
