// Handler for submitting the intake form.
use chrono::Utc;
use shared::models::{GoodsRecord, RecordId};

use crate::error::EngineError;

use super::helpers::{check_quantity, required_text};
use super::{ImageUpload, IntakeForm, IntakeService};

pub async fn handle_submit(
    service: &IntakeService,
    form: IntakeForm,
    image: Option<ImageUpload>,
) -> Result<GoodsRecord, EngineError> {
    // Everything is checked before anything touches the disk.
    let item_name = required_text(&form.item_name, "Item name")?;
    let hs_code = required_text(&form.hs_code, "HS code")?;
    let port = required_text(&form.port, "Port of rejection")?;
    let quantity = check_quantity(form.quantity)?;
    let quote = service.quote(&form)?;
    if let Some(upload) = &image {
        service.images.check_name(&upload.file_name)?;
    }

    let id = RecordId::new();
    let image_name = match &image {
        Some(upload) => Some(service.images.save(id, &upload.file_name, &upload.bytes).await?),
        None => None,
    };

    let record = GoodsRecord {
        id,
        created_at: Utc::now(),
        item_name,
        hs_code,
        quantity,
        port,
        reason: form.reason.trim().to_string(),
        category: quote.valuation.category,
        original_price: quote.valuation.original_price,
        valuation_percent: quote.valuation.percent,
        valued_price: quote.valuation.valued_price,
        scf_required: quote.scf.is_some(),
        scf: quote.scf,
        image_name,
    };

    if let Err(e) = service.store.append(record.clone()).await {
        if let Some(key) = &record.image_name {
            if let Err(cleanup) = service.images.remove(key).await {
                tracing::warn!(key = %key, error = %cleanup, "Could not remove image after failed submission");
            }
        }
        return Err(e);
    }

    tracing::info!(
        record_id = %record.id,
        item_name = %record.item_name,
        valued_price = record.valued_price,
        scf_required = record.scf_required,
        "Item successfully submitted"
    );
    Ok(record)
}
