// Handler for the per-record delete action.
use shared::models::{GoodsRecord, RecordId};

use crate::data::{ImageStore, RecordStore};
use crate::error::EngineError;

pub async fn handle_delete(
    store: &RecordStore,
    images: &ImageStore,
    id: RecordId,
) -> Result<GoodsRecord, EngineError> {
    let removed = store.remove(id).await?;

    // The record is already gone; a leftover image file is only worth a warning.
    if let Some(key) = &removed.image_name {
        if let Err(e) = images.remove(key).await {
            tracing::warn!(record_id = %id, key = %key, error = %e, "Could not remove image of deleted record");
        }
    }

    tracing::info!(record_id = %id, item_name = %removed.item_name, "Item deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::review_service::tests::create_test_review;
    use crate::test_support::sample_record;

    #[tokio::test]
    async fn test_delete_reduces_length_by_one() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        let keep_a = sample_record("Widget", "Rotterdam");
        let doomed = sample_record("Loom", "Antwerp");
        let keep_b = sample_record("Antenna", "Hamburg");
        review.store.save(&[keep_a.clone(), doomed.clone(), keep_b.clone()]).await.unwrap();

        let removed = review.delete(doomed.id).await.unwrap();
        assert_eq!(removed, doomed);
        assert_eq!(review.store.load().await.unwrap(), vec![keep_a, keep_b]);
    }

    #[tokio::test]
    async fn test_duplicates_are_independently_deletable() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        let first = sample_record("Widget", "Rotterdam");
        let mut second = first.clone();
        second.id = RecordId::new();
        review.store.save(&[first.clone(), second.clone()]).await.unwrap();

        review.delete(second.id).await.unwrap();
        assert_eq!(review.store.load().await.unwrap(), vec![first]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_explicit_failure() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        let records = vec![sample_record("Widget", "Rotterdam")];
        review.store.save(&records).await.unwrap();

        let err = review.delete(RecordId::new()).await.unwrap_err();
        assert!(matches!(err, EngineError::RecordNotFound(_)));
        assert_eq!(review.store.load().await.unwrap(), records);
    }

    #[tokio::test]
    async fn test_delete_removes_stored_image() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        let mut record = sample_record("Widget", "Rotterdam");
        let key = review.images.save(record.id, "widget.png", b"png").await.unwrap();
        record.image_name = Some(key.clone());
        review.store.save(&[record.clone()]).await.unwrap();

        review.delete(record.id).await.unwrap();
        assert!(!review.images.path_for(&key).unwrap().exists());
    }

    #[tokio::test]
    async fn test_delete_tolerates_missing_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        let mut record = sample_record("Widget", "Rotterdam");
        record.image_name = Some("gone_widget.png".to_string());
        review.store.save(&[record.clone()]).await.unwrap();

        assert!(review.delete(record.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_leaves_files_outside_uploads_alone() {
        let dir = tempfile::tempdir().unwrap();
        let review = create_test_review(&dir);
        std::fs::create_dir_all(review.images.dir()).unwrap();
        let outside = dir.path().join("precious.txt");
        std::fs::write(&outside, b"keep me").unwrap();

        let mut record = sample_record("Widget", "Rotterdam");
        record.image_name = Some("../precious.txt".to_string());
        review.store.save(&[record.clone()]).await.unwrap();

        review.delete(record.id).await.unwrap();
        assert!(outside.exists());
        assert!(review.store.load().await.unwrap().is_empty());
    }
}
