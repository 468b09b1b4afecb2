// Intake service: turns operator form input into persisted goods records.
//
// The struct lives here; each operation is handled in its own submodule.
use shared::models::{GoodsRecord, ScfDetails};

use crate::calculators::{ScfTerms, Valuation, ValuationTable};
use crate::config::EngineSettings;
use crate::data::{ImageStore, RecordStore};
use crate::error::EngineError;

pub mod helpers;
pub mod quote_entry;
pub mod submit_entry;

/// Field values collected from the intake form.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeForm {
    pub item_name: String,
    pub hs_code: String,
    pub quantity: u32,
    pub port: String,
    pub reason: String,
    pub category: String,
    pub original_price: f64,
    /// Replaces the category default when set.
    pub override_percent: Option<f64>,
    /// Present only when the operator opted in to financing.
    pub scf: Option<ScfTerms>,
}

/// An image picked in the form, read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Figures shown on the form before submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub valuation: Valuation,
    pub max_scf_amount: f64,
    pub scf: Option<ScfDetails>,
}

pub struct IntakeService {
    table: ValuationTable,
    store: RecordStore,
    images: ImageStore,
    scf_cap_ratio: f64,
    max_scf_days: u32,
}

impl IntakeService {
    pub fn new(settings: &EngineSettings, store: RecordStore, images: ImageStore) -> Self {
        IntakeService {
            table: ValuationTable::from_settings(settings),
            store,
            images,
            scf_cap_ratio: settings.scf_cap_ratio,
            max_scf_days: settings.max_scf_days,
        }
    }

    pub fn valuation_table(&self) -> &ValuationTable {
        &self.table
    }

    pub fn scf_cap_ratio(&self) -> f64 {
        self.scf_cap_ratio
    }

    pub fn max_scf_days(&self) -> u32 {
        self.max_scf_days
    }

    /// Computes valuation and financing for the current form without saving.
    pub fn quote(&self, form: &IntakeForm) -> Result<Quote, EngineError> {
        tracing::debug!(
            category = %form.category,
            original_price = form.original_price,
            override_percent = ?form.override_percent,
            scf = form.scf.is_some(),
            "Quoting intake form"
        );
        quote_entry::handle_quote(form, &self.table, self.scf_cap_ratio, self.max_scf_days)
    }

    /// Validates the form, stores the image (if any) and appends the record.
    pub async fn submit(&self, form: IntakeForm, image: Option<ImageUpload>) -> Result<GoodsRecord, EngineError> {
        tracing::info!(
            item_name = %form.item_name,
            port = %form.port,
            category = %form.category,
            has_image = image.is_some(),
            "Received intake submission, dispatching to handler."
        );
        submit_entry::handle_submit(self, form, image).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn create_test_service(dir: &TempDir) -> IntakeService {
        let settings = EngineSettings::rooted_at(dir.path());
        let store = RecordStore::new(&settings.data_file);
        let images = ImageStore::new(&settings.uploads_dir, &settings.allowed_image_extensions);
        IntakeService::new(&settings, store, images)
    }

    pub(crate) fn widget_form() -> IntakeForm {
        IntakeForm {
            item_name: "Widget".to_string(),
            hs_code: "8543.70".to_string(),
            quantity: 12,
            port: "Rotterdam".to_string(),
            reason: "Cartons crushed in transit".to_string(),
            category: "Electronics".to_string(),
            original_price: 1000.0,
            override_percent: Some(50.0),
            scf: None,
        }
    }

    #[test]
    fn test_service_exposes_configured_limits() {
        let dir = tempfile::tempdir().unwrap();
        let service = create_test_service(&dir);
        assert_eq!(service.scf_cap_ratio(), 0.6);
        assert_eq!(service.max_scf_days(), 365);
        assert_eq!(service.valuation_table().categories()[0], "Electronics");
    }
}
