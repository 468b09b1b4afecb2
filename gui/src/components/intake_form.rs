// Intake form: item fields, image picker, valuation and optional SCF terms.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::services::ImageUpload;
use shared::utils::{format_money, format_percent};
use std::path::Path;

use crate::services::engine_client::EngineClient;
use crate::state::app_state::AppState;

#[component]
pub fn IntakeForm() -> Element {
    let client = use_context::<EngineClient>();
    let app_state = use_context::<AppState>();
    let categories = client.categories();
    let max_days = client.max_scf_days();

    let form_client = client.clone();
    let mut form = use_signal(move || form_client.blank_form());
    let mut image = use_signal(|| None::<ImageUpload>);
    let mut submitting = use_signal(|| false);

    // Recomputed on every edit so the operator sees figures before submitting.
    let quote_client = client.clone();
    let quote = use_memo(move || quote_client.quote(&form.read()));

    let values = form();
    let picked_image = image.read().as_ref().map(|upload| upload.file_name.clone());
    let current_quote = quote();
    let max_scf = current_quote.as_ref().map(|q| q.max_scf_amount).unwrap_or(0.0);
    let scf_amount_label = format!("SCF Amount (max {})", format_money(max_scf));
    let picked_label = picked_image.map(|name| format!("Selected: {}", display_name(&name)));

    let quote_view = match current_quote {
        Ok(q) => {
            let valuation_line = format!(
                "Valuation: {} of {} (default {})",
                format_percent(q.valuation.percent),
                format_money(q.valuation.original_price),
                format_percent(q.valuation.default_percent)
            );
            let valued_line = format!("Valued Price: {}", format_money(q.valuation.valued_price));
            let scf_lines = q.scf.map(|scf| {
                (
                    format!("Interest Payable: {}", format_money(scf.interest_payable)),
                    format!("Total Repayment: {}", format_money(scf.total_repayment)),
                )
            });
            rsx! {
                p { "{valuation_line}" }
                p { strong { "{valued_line}" } }
                if let Some((interest_line, total_line)) = scf_lines {
                    p { "{interest_line}" }
                    p { strong { "{total_line}" } }
                }
            }
        }
        Err(msg) => rsx! { p { class: "notice-error", "{msg}" } },
    };

    let select_client = client.clone();
    let on_category = move |evt: FormEvent| {
        let category = evt.value();
        let percent = select_client.default_percent(&category);
        form.write().select_category(category, percent);
    };

    let on_image = move |evt: FormEvent| {
        let Some(files) = evt.files() else { return };
        spawn(async move {
            let Some(path) = files.files().into_iter().next() else { return };
            match files.read_file(&path).await {
                Some(bytes) => {
                    tracing::debug!(file = %path, size = bytes.len(), "Image picked");
                    image.set(Some(ImageUpload { file_name: path, bytes }));
                }
                None => app_state.error(format!("Could not read '{}'.", path)),
            }
        });
    };

    let submit_client = client.clone();
    let on_submit = move |_| {
        let client = submit_client.clone();
        spawn(async move {
            submitting.set(true);
            match client.submit(form(), image()).await {
                Ok(record) => {
                    app_state.success(format!("Item successfully submitted! ({})", record.item_name));
                    form.set(client.blank_form());
                    image.set(None);
                    app_state.refresh();
                }
                Err(msg) => app_state.error(msg),
            }
            submitting.set(false);
        });
    };

    rsx! {
        section { class: "intake",
            div { class: "row",
                div { class: "field",
                    label { "Item Name" }
                    input { r#type: "text", value: "{values.item_name}", oninput: move |evt| form.write().item_name = evt.value() }
                }
                div { class: "field",
                    label { "HS Code" }
                    input { r#type: "text", value: "{values.hs_code}", oninput: move |evt| form.write().hs_code = evt.value() }
                }
            }
            div { class: "row",
                div { class: "field",
                    label { "Quantity" }
                    input { r#type: "number", min: "1", step: "1", value: "{values.quantity}", oninput: move |evt| form.write().quantity = evt.value() }
                }
                div { class: "field",
                    label { "Port of Rejection" }
                    input { r#type: "text", value: "{values.port}", oninput: move |evt| form.write().port = evt.value() }
                }
            }
            div { class: "field",
                label { "Reason for Rejection" }
                textarea { value: "{values.reason}", oninput: move |evt| form.write().reason = evt.value() }
            }
            div { class: "field",
                label { "Upload Item Image (optional)" }
                input { r#type: "file", accept: ".jpg,.jpeg,.png", onchange: on_image }
                if let Some(label) = picked_label {
                    small { "{label}" }
                }
            }
            div { class: "row",
                div { class: "field",
                    label { "Category" }
                    select { value: "{values.category}", onchange: on_category,
                        for name in categories.iter() {
                            option { value: "{name}", selected: *name == values.category, "{name}" }
                        }
                    }
                }
                div { class: "field",
                    label { "Original Price" }
                    input { r#type: "number", min: "0", step: "0.01", value: "{values.original_price}", oninput: move |evt| form.write().original_price = evt.value() }
                }
                div { class: "field",
                    label { "Valuation % (override)" }
                    input { r#type: "number", min: "0", max: "100", step: "0.01", value: "{values.override_percent}", oninput: move |evt| form.write().override_percent = evt.value() }
                }
            }
            div { class: "field",
                label {
                    input {
                        r#type: "checkbox",
                        checked: values.scf_required,
                        oninput: move |evt| form.write().scf_required = evt.value().parse().unwrap_or(false),
                    }
                    " Request Supply Chain Finance"
                }
            }
            if values.scf_required {
                div { class: "row",
                    div { class: "field",
                        label { "{scf_amount_label}" }
                        input { r#type: "number", min: "0", max: "{max_scf}", step: "0.01", value: "{values.scf_amount}", oninput: move |evt| form.write().scf_amount = evt.value() }
                    }
                    div { class: "field",
                        label { "Interest Rate (% p.a.)" }
                        input { r#type: "number", min: "0", max: "100", step: "0.01", value: "{values.scf_interest_rate}", oninput: move |evt| form.write().scf_interest_rate = evt.value() }
                    }
                    div { class: "field",
                        label { "Days" }
                        input { r#type: "number", min: "1", max: "{max_days}", step: "1", value: "{values.scf_days}", oninput: move |evt| form.write().scf_days = evt.value() }
                    }
                }
            }
            div { class: "quote", {quote_view} }
            button { disabled: submitting(), onclick: on_submit, "Submit" }
        }
    }
}

// Desktop file pickers hand back full paths; show just the file name.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
