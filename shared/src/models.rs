use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier assigned to a record when it is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Placeholder id carried by entries written before ids existed.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// First block of the uuid, used for compact display and file keys.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Supply-chain-finance terms and the figures derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScfDetails {
    pub amount: f64,
    /// Percent per annum.
    pub interest_rate: f64,
    pub days: u32,
    pub interest_payable: f64,
    pub total_repayment: f64,
}

/// One damaged or rejected shipment entry.
///
/// Records are immutable once submitted. `valued_price` and the SCF figures are
/// derived at submission time and stored alongside their inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsRecord {
    // Entries written before ids existed come back nil; the store assigns one.
    #[serde(default = "RecordId::nil")]
    pub id: RecordId,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    pub item_name: String,
    pub hs_code: String,
    pub quantity: u32,
    pub port: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub valuation_percent: f64,
    #[serde(default)]
    pub valued_price: f64,
    #[serde(default)]
    pub scf_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scf: Option<ScfDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
}

impl GoodsRecord {
    /// True when the record predates submission timestamps.
    pub fn is_legacy(&self) -> bool {
        self.created_at == DateTime::<Utc>::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_entry_deserializes_with_defaults() {
        let raw = r#"{
            "item_name": "Widget",
            "hs_code": "8471",
            "quantity": 3,
            "port": "Rotterdam",
            "reason": "Crushed pallet"
        }"#;
        let record: GoodsRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.item_name, "Widget");
        assert_eq!(record.quantity, 3);
        assert!(record.is_legacy());
        assert!(record.id.is_nil());
        assert!(!record.scf_required);
        assert!(record.scf.is_none());
        assert!(record.image_name.is_none());
        assert_eq!(record.valued_price, 0.0);
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let record = GoodsRecord {
            id: RecordId::new(),
            created_at: Utc::now(),
            item_name: "Widget".to_string(),
            hs_code: "8471".to_string(),
            quantity: 1,
            port: "Hamburg".to_string(),
            reason: String::new(),
            category: "Electronics".to_string(),
            original_price: 10.0,
            valuation_percent: 50.0,
            valued_price: 5.0,
            scf_required: false,
            scf: None,
            image_name: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("scf").is_none());
        assert!(json.get("image_name").is_none());
        assert_eq!(json["id"], serde_json::Value::String(record.id.to_string()));
    }

    #[test]
    fn test_record_ids_are_unique() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b);
        assert_eq!(a.short().len(), 8);
    }
}
