// Handler for the search box.
use shared::models::GoodsRecord;
use shared::utils::contains_ignore_case;

use crate::data::RecordStore;
use crate::error::EngineError;

pub async fn handle_search(store: &RecordStore, query: &str) -> Result<Vec<GoodsRecord>, EngineError> {
    let records = store.load().await?;
    let total = records.len();
    let matches = filter_records(records, query);
    tracing::debug!(query = %query, total, matched = matches.len(), "Search complete");
    Ok(matches)
}

/// Keeps records whose item name or port contains `query` (case-insensitive),
/// preserving store order. A blank query keeps everything.
pub fn filter_records(records: Vec<GoodsRecord>, query: &str) -> Vec<GoodsRecord> {
    let query = query.trim();
    records
        .into_iter()
        .filter(|r| contains_ignore_case(&r.item_name, query) || contains_ignore_case(&r.port, query))
        .collect()
}
