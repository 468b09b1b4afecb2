// Content area for uploaded item images.
use shared::models::RecordId;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::error::EngineError;

/// Stores uploaded images under `<record id>_<original name>` so two uploads
/// with the same file name never overwrite each other.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    allowed_extensions: Vec<String>,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, allowed_extensions: &[String]) -> Self {
        ImageStore {
            dir: dir.into(),
            allowed_extensions: allowed_extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Checks that `original_name` has an allowed extension and returns the
    /// sanitised file name.
    pub fn check_name(&self, original_name: &str) -> Result<String, EngineError> {
        let file_name = sanitize_file_name(original_name);
        let extension = Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !self.allowed_extensions.contains(&extension) {
            return Err(EngineError::UnsupportedImage(format!(
                "'{}' is not one of: {}",
                original_name,
                self.allowed_extensions.join(", ")
            )));
        }
        Ok(file_name)
    }

    /// Writes the image and returns the key to store on the record.
    pub async fn save(&self, id: RecordId, original_name: &str, bytes: &[u8]) -> Result<String, EngineError> {
        let file_name = self.check_name(original_name)?;
        let key = format!("{}_{}", id.short(), file_name);
        fs::create_dir_all(&self.dir).await?;
        fs::write(self.path_for(&key)?, bytes).await?;
        tracing::info!(record_id = %id, key = %key, size = bytes.len(), "Stored item image");
        Ok(key)
    }

    /// Location of a stored image. Keys come from the hand-editable data file,
    /// so anything other than a plain file name inside the content area is refused.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, EngineError> {
        let mut components = Path::new(key).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.dir.join(key)),
            _ => Err(EngineError::UnsupportedImage(format!(
                "'{}' is not a file name inside the image folder",
                key
            ))),
        }
    }

    /// Deletes a stored image. A missing file is not an error.
    pub async fn remove(&self, key: &str) -> Result<(), EngineError> {
        match fs::remove_file(self.path_for(key)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(key = %key, "Image already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

// Keeps only the final path component and replaces characters that are
// awkward in file names.
fn sanitize_file_name(original_name: &str) -> String {
    let base = original_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(original_name);
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "image".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn image_store(dir: &Path) -> ImageStore {
        let exts = vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()];
        ImageStore::new(dir.join("uploads"), &exts)
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("/home/op/Pictures/box photo.png"), "box_photo.png");
        assert_eq!(sanitize_file_name("C:\\scans\\crate.JPG"), "crate.JPG");
        assert_eq!(sanitize_file_name("..png"), "png");
        assert_eq!(sanitize_file_name("../"), "image");
    }

    #[test]
    fn test_check_name_rejects_other_types() {
        let dir = tempdir().unwrap();
        let store = image_store(dir.path());
        assert!(store.check_name("photo.PNG").is_ok());
        let err = store.check_name("notes.pdf").unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedImage(_)));
        assert!(store.check_name("no_extension").is_err());
    }

    #[tokio::test]
    async fn test_same_name_uploads_do_not_collide() {
        let dir = tempdir().unwrap();
        let store = image_store(dir.path());
        let a = store.save(RecordId::new(), "crate.png", b"first").await.unwrap();
        let b = store.save(RecordId::new(), "crate.png", b"second").await.unwrap();

        assert_ne!(a, b);
        assert!(a.ends_with("_crate.png"));
        assert_eq!(std::fs::read(store.path_for(&a).unwrap()).unwrap(), b"first");
        assert_eq!(std::fs::read(store.path_for(&b).unwrap()).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = image_store(dir.path());
        let key = store.save(RecordId::new(), "crate.jpg", b"bytes").await.unwrap();
        store.remove(&key).await.unwrap();
        assert!(!store.path_for(&key).unwrap().exists());
        store.remove(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_keys_outside_content_area_are_refused() {
        let dir = tempdir().unwrap();
        let store = image_store(dir.path());
        let outside = dir.path().join("ledger.json");
        std::fs::write(&outside, b"[]").unwrap();
        let absolute = outside.display().to_string();

        for key in ["../ledger.json", absolute.as_str(), "nested/crate.png", "", "."] {
            assert!(
                matches!(store.path_for(key), Err(EngineError::UnsupportedImage(_))),
                "key {:?} should be refused",
                key
            );
            assert!(store.remove(key).await.is_err());
        }
        assert!(outside.exists());
        assert!(store.path_for("abcd1234_crate.png").is_ok());
    }
}
