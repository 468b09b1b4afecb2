// Expandable panel for one stored record, with its delete action.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::services::RecordSummary;

use crate::services::engine_client::EngineClient;
use crate::state::app_state::AppState;

#[component]
pub fn RecordCard(entry: RecordSummary) -> Element {
    let client = use_context::<EngineClient>();
    let app_state = use_context::<AppState>();
    let id = entry.id;
    let image_src = entry.image_path.as_ref().map(|p| p.display().to_string());

    let delete = move |_| {
        let client = client.clone();
        spawn(async move {
            match client.delete(id).await {
                Ok(_) => {
                    app_state.success("Item deleted.");
                    app_state.refresh();
                }
                Err(msg) => app_state.error(msg),
            }
        });
    };

    rsx! {
        details { class: "record-card",
            summary { "📌 {entry.title}" }
            dl {
                for (label, value) in entry.fields.iter() {
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
            if let Some(src) = image_src {
                img { src: "{src}", width: "200" }
            }
            button { class: "danger", onclick: delete, "🗑️ Delete" }
        }
    }
}
