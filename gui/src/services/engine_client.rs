// Thin async facade over the intake engine for the GUI components.
//
// Every failure is logged here and turned into the operator-facing message,
// so components only ever deal with `Result<_, String>`.
use engine::services::{ImageUpload, Quote, RecordSummary, StoreStats};
use engine::GoodsIntakeEngine;
use shared::models::{GoodsRecord, RecordId};
use std::path::PathBuf;
use std::sync::Arc;

use crate::state::form_state::FormState;

#[derive(Clone)]
pub struct EngineClient {
    engine: Arc<GoodsIntakeEngine>,
    export_path: PathBuf,
}

impl EngineClient {
    pub fn new(engine: GoodsIntakeEngine, export_file_name: &str) -> Self {
        // Exports land next to the data file.
        let export_path = engine
            .settings()
            .data_file
            .parent()
            .map(|dir| dir.join(export_file_name))
            .unwrap_or_else(|| PathBuf::from(export_file_name));
        Self { engine: Arc::new(engine), export_path }
    }

    pub fn categories(&self) -> Vec<String> {
        self.engine.intake.valuation_table().categories()
    }

    pub fn default_percent(&self, category: &str) -> f64 {
        self.engine.intake.valuation_table().default_percent(category).unwrap_or(0.0)
    }

    /// A blank form preset to the first configured category.
    pub fn blank_form(&self) -> FormState {
        let first = self.categories().into_iter().next().unwrap_or_default();
        let percent = self.default_percent(&first);
        FormState::new(&first, percent)
    }

    pub fn max_scf_days(&self) -> u32 {
        self.engine.intake.max_scf_days()
    }

    pub fn quote(&self, form: &FormState) -> Result<Quote, String> {
        let intake_form = form.to_intake_form()?;
        self.engine.intake.quote(&intake_form).map_err(|e| e.operator_message())
    }

    pub async fn submit(&self, form: FormState, image: Option<ImageUpload>) -> Result<GoodsRecord, String> {
        let intake_form = form.to_intake_form()?;
        self.engine
            .intake
            .submit(intake_form, image)
            .await
            .map_err(|e| e.operator_message())
    }

    pub async fn search(&self, query: String) -> Result<Vec<RecordSummary>, String> {
        let records = self.engine.review.search(&query).await.map_err(|e| e.operator_message())?;
        Ok(records.iter().map(|r| self.engine.review.summarize(r)).collect())
    }

    pub async fn delete(&self, id: RecordId) -> Result<GoodsRecord, String> {
        self.engine.review.delete(id).await.map_err(|e| e.operator_message())
    }

    pub async fn stats(&self) -> Result<StoreStats, String> {
        self.engine.review.stats().await.map_err(|e| e.operator_message())
    }

    pub async fn export_csv(&self) -> Result<(usize, PathBuf), String> {
        let count = self
            .engine
            .review
            .export_csv("", &self.export_path)
            .await
            .map_err(|e| e.operator_message())?;
        Ok((count, self.export_path.clone()))
    }
}
