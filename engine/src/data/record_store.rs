// Flat-file persistence for goods records.
use serde::Serialize;
use shared::models::{GoodsRecord, RecordId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::EngineError;

/// Owns the persisted record sequence: a single pretty-printed JSON array.
///
/// Every mutation is a full load/modify/save cycle. There is no locking, so two
/// processes writing the same file will lose updates; last writer wins.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every stored record in insertion order. A missing or empty file
    /// is an empty store; an unparsable one is an error.
    pub async fn load(&self) -> Result<Vec<GoodsRecord>, EngineError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No record store yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut records: Vec<GoodsRecord> = serde_json::from_str(&raw).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "Record store is malformed");
            EngineError::MalformedStore { path: self.path.clone(), source }
        })?;

        let missing_ids = records.iter().filter(|r| r.id.is_nil()).count();
        if missing_ids > 0 {
            for record in records.iter_mut().filter(|r| r.id.is_nil()) {
                record.id = RecordId::new();
            }
            tracing::warn!(path = %self.path.display(), upgraded = missing_ids, "Assigned ids to legacy records");
            self.save(&records).await?;
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }

    /// Overwrites the file with the full sequence.
    pub async fn save(&self, records: &[GoodsRecord]) -> Result<(), EngineError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;
        buf.push(b'\n');

        fs::write(&self.path, buf).await?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "Saved records");
        Ok(())
    }

    pub async fn append(&self, record: GoodsRecord) -> Result<(), EngineError> {
        let mut records = self.load().await?;
        records.push(record);
        self.save(&records).await
    }

    /// Removes the record with `id` and returns it.
    pub async fn remove(&self, id: RecordId) -> Result<GoodsRecord, EngineError> {
        let mut records = self.load().await?;
        let position = records
            .iter()
            .position(|r| r.id == id)
            .ok_or(EngineError::RecordNotFound(id))?;
        let removed = records.remove(position);
        self.save(&records).await?;
        Ok(removed)
    }
}
