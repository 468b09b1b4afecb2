// Raw intake form values as typed by the operator, and their conversion into
// an engine `IntakeForm`.
use engine::calculators::ScfTerms;
use engine::services::IntakeForm;

/// Text fields are kept exactly as typed; numbers are parsed on demand so a
/// half-typed value never clobbers the input widget.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub item_name: String,
    pub hs_code: String,
    pub quantity: String,
    pub port: String,
    pub reason: String,
    pub category: String,
    pub original_price: String,
    pub override_percent: String,
    pub scf_required: bool,
    pub scf_amount: String,
    pub scf_interest_rate: String,
    pub scf_days: String,
}

impl FormState {
    /// Blank form preset to `category` and its default percent.
    pub fn new(category: &str, default_percent: f64) -> Self {
        Self {
            item_name: String::new(),
            hs_code: String::new(),
            quantity: "1".to_string(),
            port: String::new(),
            reason: String::new(),
            category: category.to_string(),
            original_price: "0".to_string(),
            override_percent: trim_number(default_percent),
            scf_required: false,
            scf_amount: "0".to_string(),
            scf_interest_rate: "0".to_string(),
            scf_days: "30".to_string(),
        }
    }

    /// Switches category and resets the override to the new default.
    pub fn select_category(&mut self, category: String, default_percent: f64) {
        self.category = category;
        self.override_percent = trim_number(default_percent);
    }

    pub fn to_intake_form(&self) -> Result<IntakeForm, String> {
        let quantity = parse_whole(&self.quantity, "Quantity")?;
        let original_price = parse_decimal(&self.original_price, "Original price")?;
        let override_percent = if self.override_percent.trim().is_empty() {
            None
        } else {
            Some(parse_decimal(&self.override_percent, "Valuation percent")?)
        };

        let scf = if self.scf_required {
            Some(ScfTerms {
                amount: parse_decimal(&self.scf_amount, "SCF amount")?,
                interest_rate: parse_decimal(&self.scf_interest_rate, "SCF interest rate")?,
                days: parse_whole(&self.scf_days, "SCF days")?,
            })
        } else {
            None
        };

        Ok(IntakeForm {
            item_name: self.item_name.clone(),
            hs_code: self.hs_code.clone(),
            quantity,
            port: self.port.clone(),
            reason: self.reason.clone(),
            category: self.category.clone(),
            original_price,
            override_percent,
            scf,
        })
    }
}

fn parse_decimal(raw: &str, label: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{} must be a number.", label))
}

fn parse_whole(raw: &str, label: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("{} must be a whole number.", label))
}

// 50.0 -> "50", 12.5 -> "12.5"
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            item_name: "Widget".to_string(),
            hs_code: "8543".to_string(),
            port: "Rotterdam".to_string(),
            original_price: "1000".to_string(),
            ..FormState::new("Electronics", 50.0)
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = FormState::new("Textiles", 12.5);
        assert_eq!(form.quantity, "1");
        assert_eq!(form.override_percent, "12.5");
        assert!(!form.scf_required);
    }

    #[test]
    fn test_select_category_resets_override() {
        let mut form = FormState::new("Electronics", 50.0);
        form.override_percent = "70".to_string();
        form.select_category("Machinery".to_string(), 60.0);
        assert_eq!(form.category, "Machinery");
        assert_eq!(form.override_percent, "60");
    }

    #[test]
    fn test_to_intake_form_without_scf() {
        let form = filled().to_intake_form().unwrap();
        assert_eq!(form.quantity, 1);
        assert_eq!(form.original_price, 1000.0);
        assert_eq!(form.override_percent, Some(50.0));
        assert!(form.scf.is_none());
    }

    #[test]
    fn test_scf_fields_ignored_unless_opted_in() {
        let mut state = filled();
        state.scf_amount = "not a number".to_string();
        assert!(state.to_intake_form().is_ok());

        state.scf_required = true;
        assert_eq!(state.to_intake_form().unwrap_err(), "SCF amount must be a number.");
    }

    #[test]
    fn test_scf_terms_parsed() {
        let mut state = filled();
        state.scf_required = true;
        state.scf_amount = "200".to_string();
        state.scf_interest_rate = "10".to_string();
        state.scf_days = "60".to_string();
        let terms = state.to_intake_form().unwrap().scf.unwrap();
        assert_eq!(terms, ScfTerms { amount: 200.0, interest_rate: 10.0, days: 60 });
    }

    #[test]
    fn test_blank_override_means_category_default() {
        let mut state = filled();
        state.override_percent = " ".to_string();
        assert_eq!(state.to_intake_form().unwrap().override_percent, None);
    }

    #[test]
    fn test_bad_numbers_are_reported() {
        let mut state = filled();
        state.quantity = "2.5".to_string();
        assert_eq!(state.to_intake_form().unwrap_err(), "Quantity must be a whole number.");

        let mut state = filled();
        state.original_price = "inf".to_string();
        assert_eq!(state.to_intake_form().unwrap_err(), "Original price must be a number.");
    }
}
