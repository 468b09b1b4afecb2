// Engine services consumed by the GUI.
pub mod intake_service;
pub mod review_service;

use crate::config::EngineSettings;
use crate::data::{ImageStore, RecordStore};
use crate::error::EngineError;

pub use intake_service::{ImageUpload, IntakeForm, IntakeService, Quote};
pub use review_service::{RecordSummary, ReviewService, StoreStats};

/// Both services wired to the same record store and image area.
pub struct GoodsIntakeEngine {
    settings: EngineSettings,
    pub intake: IntakeService,
    pub review: ReviewService,
}

impl GoodsIntakeEngine {
    /// Validates settings and makes sure the working directories exist.
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        settings.validate()?;
        settings.ensure_directories()?;

        let store = RecordStore::new(&settings.data_file);
        let images = ImageStore::new(&settings.uploads_dir, &settings.allowed_image_extensions);
        tracing::info!(
            data_file = %settings.data_file.display(),
            uploads_dir = %settings.uploads_dir.display(),
            categories = settings.valuation_table.len(),
            "Goods intake engine ready"
        );

        Ok(GoodsIntakeEngine {
            intake: IntakeService::new(&settings, store.clone(), images.clone()),
            review: ReviewService::new(store, images),
            settings,
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}
