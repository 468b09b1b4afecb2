// CSV export of stored records for spreadsheets and customs paperwork.
use csv::Writer;
use serde::Serialize;
use shared::models::GoodsRecord;
use std::io::Write;
use std::path::Path;
use tokio::fs;

use crate::error::EngineError;

// Column order of `GoodsCsvRow`; written by hand only when there are no rows.
const CSV_HEADERS: [&str; 18] = [
    "id",
    "created_at",
    "item_name",
    "hs_code",
    "quantity",
    "port",
    "reason",
    "category",
    "original_price",
    "valuation_percent",
    "valued_price",
    "scf_required",
    "scf_amount",
    "scf_interest_rate",
    "scf_days",
    "scf_interest_payable",
    "scf_total_repayment",
    "image_name",
];

/// One CSV row. Amounts are written at full precision; SCF columns are empty
/// when the record has no financing.
#[derive(Debug, Serialize)]
struct GoodsCsvRow<'a> {
    id: String,
    created_at: String,
    item_name: &'a str,
    hs_code: &'a str,
    quantity: u32,
    port: &'a str,
    reason: &'a str,
    category: &'a str,
    original_price: f64,
    valuation_percent: f64,
    valued_price: f64,
    scf_required: bool,
    scf_amount: Option<f64>,
    scf_interest_rate: Option<f64>,
    scf_days: Option<u32>,
    scf_interest_payable: Option<f64>,
    scf_total_repayment: Option<f64>,
    image_name: &'a str,
}

impl<'a> From<&'a GoodsRecord> for GoodsCsvRow<'a> {
    fn from(record: &'a GoodsRecord) -> Self {
        let scf = record.scf.as_ref();
        GoodsCsvRow {
            id: record.id.to_string(),
            created_at: record.created_at.to_rfc3339(),
            item_name: &record.item_name,
            hs_code: &record.hs_code,
            quantity: record.quantity,
            port: &record.port,
            reason: &record.reason,
            category: &record.category,
            original_price: record.original_price,
            valuation_percent: record.valuation_percent,
            valued_price: record.valued_price,
            scf_required: record.scf_required,
            scf_amount: scf.map(|s| s.amount),
            scf_interest_rate: scf.map(|s| s.interest_rate),
            scf_days: scf.map(|s| s.days),
            scf_interest_payable: scf.map(|s| s.interest_payable),
            scf_total_repayment: scf.map(|s| s.total_repayment),
            image_name: record.image_name.as_deref().unwrap_or(""),
        }
    }
}

pub fn write_csv<W: Write>(records: &[GoodsRecord], writer: W) -> Result<usize, EngineError> {
    let mut wtr = Writer::from_writer(writer);
    if records.is_empty() {
        wtr.write_record(CSV_HEADERS)?;
    }
    for record in records {
        wtr.serialize(GoodsCsvRow::from(record))?;
    }
    wtr.flush()?;
    Ok(records.len())
}

/// Writes `records` to `path`, replacing any previous export.
pub async fn export_csv(records: &[GoodsRecord], path: &Path) -> Result<usize, EngineError> {
    let mut buffer = Vec::new();
    let count = write_csv(records, &mut buffer)?;
    fs::write(path, buffer).await?;
    tracing::info!(path = %path.display(), count, "Exported records to CSV");
    Ok(count)
}
