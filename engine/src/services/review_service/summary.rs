// Labelled, display-ready views of stored records.
use shared::models::{GoodsRecord, RecordId};
use shared::utils::{format_money, format_percent};
use std::path::PathBuf;

use crate::data::ImageStore;

/// What an expandable review panel shows for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSummary {
    pub id: RecordId,
    pub title: String,
    pub fields: Vec<(String, String)>,
    pub image_path: Option<PathBuf>,
}

impl RecordSummary {
    pub fn from_record(record: &GoodsRecord, images: &ImageStore) -> Self {
        let submitted = if record.is_legacy() {
            "Unknown".to_string()
        } else {
            record.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
        };

        let mut fields = vec![
            field("HS Code", record.hs_code.clone()),
            field("Quantity", record.quantity.to_string()),
            field("Reason", record.reason.clone()),
            field("Category", record.category.clone()),
            field("Original Price", format_money(record.original_price)),
            field("Valuation", format_percent(record.valuation_percent)),
            field("Valued Price", format_money(record.valued_price)),
            field("Submitted", submitted),
        ];

        if let Some(scf) = &record.scf {
            fields.push(field("SCF Amount", format_money(scf.amount)));
            fields.push(field("SCF Interest Rate", format!("{} p.a.", format_percent(scf.interest_rate))));
            fields.push(field("SCF Term", format!("{} days", scf.days)));
            fields.push(field("Interest Payable", format_money(scf.interest_payable)));
            fields.push(field("Total Repayment", format_money(scf.total_repayment)));
        }

        RecordSummary {
            id: record.id,
            title: format!("{} (Port: {})", record.item_name, record.port),
            fields,
            image_path: record.image_name.as_deref().and_then(|key| images.path_for(key).ok()),
        }
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields.iter().find(|(l, _)| l == label).map(|(_, v)| v.as_str())
    }
}

fn field(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}

/// Totals shown in the toolbar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreStats {
    pub count: usize,
    pub financed_count: usize,
    pub total_valued_price: f64,
    pub total_scf_amount: f64,
}

impl StoreStats {
    pub fn from_records(records: &[GoodsRecord]) -> Self {
        records.iter().fold(StoreStats::default(), |mut stats, r| {
            stats.count += 1;
            stats.total_valued_price += r.valued_price;
            if let Some(scf) = &r.scf {
                stats.financed_count += 1;
                stats.total_scf_amount += scf.amount;
            }
            stats
        })
    }
}
