// Review service: search, summarise, delete and export stored records.
use shared::models::{GoodsRecord, RecordId};
use std::path::Path;

use crate::data::csv_export;
use crate::data::{ImageStore, RecordStore};
use crate::error::EngineError;

pub mod delete_entry;
pub mod search_entries;
pub mod summary;

pub use summary::{RecordSummary, StoreStats};

pub struct ReviewService {
    store: RecordStore,
    images: ImageStore,
}

impl ReviewService {
    pub fn new(store: RecordStore, images: ImageStore) -> Self {
        ReviewService { store, images }
    }

    /// Records whose item name or port contains `query`, ignoring case.
    pub async fn search(&self, query: &str) -> Result<Vec<GoodsRecord>, EngineError> {
        tracing::debug!(query = %query, "Received search request, dispatching to handler.");
        search_entries::handle_search(&self.store, query).await
    }

    /// Removes the record and its stored image.
    pub async fn delete(&self, id: RecordId) -> Result<GoodsRecord, EngineError> {
        tracing::info!(record_id = %id, "Received delete request, dispatching to handler.");
        delete_entry::handle_delete(&self.store, &self.images, id).await
    }

    pub fn summarize(&self, record: &GoodsRecord) -> RecordSummary {
        RecordSummary::from_record(record, &self.images)
    }

    pub async fn stats(&self) -> Result<StoreStats, EngineError> {
        let records = self.store.load().await?;
        Ok(StoreStats::from_records(&records))
    }

    /// Exports the records matching `query` (all when empty) to `path`.
    pub async fn export_csv(&self, query: &str, path: &Path) -> Result<usize, EngineError> {
        let records = self.search(query).await?;
        csv_export::export_csv(&records, path).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use crate::test_support::{sample_record, sample_record_with_scf};
    use tempfile::TempDir;

    pub(crate) fn create_test_review(dir: &TempDir) -> ReviewService {
        let settings = EngineSettings::rooted_at(dir.path());
        ReviewService::new(
            RecordStore::new(&settings.data_file),
            ImageStore::new(&settings.uploads_dir, &settings.allowed_image_extensions),
        )
    }

    #[tokio::test]
    async fn test_stats_over_store() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        review
            .store
            .save(&[sample_record("Widget", "Rotterdam"), sample_record_with_scf("Loom", "Antwerp")])
            .await
            .unwrap();

        let stats = review.stats().await.unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.financed_count, 1);
        assert_eq!(stats.total_valued_price, 1000.0);
        assert_eq!(stats.total_scf_amount, 200.0);
    }

    #[tokio::test]
    async fn test_export_filtered_records() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        review
            .store
            .save(&[sample_record("Widget", "Rotterdam"), sample_record("Loom", "Antwerp")])
            .await
            .unwrap();

        let path = dir.path().join("export.csv");
        assert_eq!(review.export_csv("antwerp", &path).await.unwrap(), 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Loom"));
        assert!(!text.contains("Widget"));
    }

    #[tokio::test]
    async fn test_export_with_no_matches_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        let path = dir.path().join("export.csv");

        assert_eq!(review.export_csv("nowhere", &path).await.unwrap(), 0);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("id,created_at,item_name"));
        assert_eq!(text.lines().count(), 1);
    }
}
