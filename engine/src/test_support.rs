// Record fixtures for unit tests.
use chrono::{TimeZone, Utc};
use shared::models::{GoodsRecord, RecordId, ScfDetails};

pub fn sample_record(item_name: &str, port: &str) -> GoodsRecord {
    GoodsRecord {
        id: RecordId::new(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap(),
        item_name: item_name.to_string(),
        hs_code: "8471.30".to_string(),
        quantity: 4,
        port: port.to_string(),
        reason: "Water damage".to_string(),
        category: "Electronics".to_string(),
        original_price: 1000.0,
        valuation_percent: 50.0,
        valued_price: 500.0,
        scf_required: false,
        scf: None,
        image_name: None,
    }
}

pub fn sample_record_with_scf(item_name: &str, port: &str) -> GoodsRecord {
    GoodsRecord {
        scf_required: true,
        scf: Some(ScfDetails {
            amount: 200.0,
            interest_rate: 10.0,
            days: 60,
            interest_payable: 200.0 * 10.0 * 60.0 / 36500.0,
            total_repayment: 200.0 + 200.0 * 10.0 * 60.0 / 36500.0,
        }),
        ..sample_record(item_name, port)
    }
}
