// Handler for quoting a form: valuation plus optional SCF figures.
use crate::calculators::scf::{finance, max_scf_amount};
use crate::calculators::ValuationTable;
use crate::error::EngineError;

use super::{IntakeForm, Quote};

pub fn handle_quote(
    form: &IntakeForm,
    table: &ValuationTable,
    scf_cap_ratio: f64,
    max_scf_days: u32,
) -> Result<Quote, EngineError> {
    let valuation = table.appraise(&form.category, form.original_price, form.override_percent)?;
    let max_scf = max_scf_amount(valuation.valued_price, scf_cap_ratio);

    let scf = match form.scf {
        Some(terms) => Some(finance(valuation.valued_price, terms, scf_cap_ratio, max_scf_days)?),
        None => None,
    };

    Ok(Quote { valuation, max_scf_amount: max_scf, scf })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::ScfTerms;
    use crate::services::intake_service::tests::widget_form;

    fn quote(form: &IntakeForm) -> Result<Quote, EngineError> {
        handle_quote(form, &ValuationTable::default(), 0.6, 365)
    }

    #[test]
    fn test_quote_without_scf() {
        let q = quote(&widget_form()).unwrap();
        assert_eq!(q.valuation.valued_price, 500.0);
        assert_eq!(q.max_scf_amount, 300.0);
        assert!(q.scf.is_none());
    }

    #[test]
    fn test_quote_with_scf() {
        let mut form = widget_form();
        form.scf = Some(ScfTerms { amount: 200.0, interest_rate: 10.0, days: 60 });
        let q = quote(&form).unwrap();
        let scf = q.scf.unwrap();
        assert!((scf.interest_payable - 3.2877).abs() < 1e-4);
        assert!((scf.total_repayment - 203.2877).abs() < 1e-4);
    }

    #[test]
    fn test_quote_default_percent_when_not_overridden() {
        let mut form = widget_form();
        form.category = "Textiles".to_string();
        form.override_percent = None;
        let q = quote(&form).unwrap();
        assert_eq!(q.valuation.percent, 40.0);
        assert_eq!(q.valuation.valued_price, 400.0);
    }

    #[test]
    fn test_quote_rejects_scf_over_cap() {
        let mut form = widget_form();
        form.scf = Some(ScfTerms { amount: 300.5, interest_rate: 10.0, days: 60 });
        assert!(matches!(quote(&form), Err(EngineError::InputOutOfRange { field: "scf_amount", .. })));
    }
}
