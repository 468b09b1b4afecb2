// Search box and the list of matching records.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::RecordCard;
use crate::services::engine_client::EngineClient;
use crate::state::app_state::AppState;

#[component]
pub fn ReviewPanel() -> Element {
    let client = use_context::<EngineClient>();
    let app_state = use_context::<AppState>();
    let mut query = use_signal(String::new);

    // Re-runs when the query changes or a write bumps the revision.
    let results = use_resource(move || {
        let client = client.clone();
        let query = query();
        let _ = app_state.current_revision();
        async move { client.search(query).await }
    });

    let listing = match &*results.read_unchecked() {
        Some(Ok(entries)) if entries.is_empty() => rsx! { p { "No items found." } },
        Some(Ok(entries)) => rsx! {
            for entry in entries.iter() {
                RecordCard { key: "{entry.id}", entry: entry.clone() }
            }
        },
        Some(Err(msg)) => rsx! { p { class: "notice-error", "⚠️ {msg}" } },
        None => rsx! { p { "Loading…" } },
    };

    rsx! {
        section { class: "review",
            h2 { "🔍 Uploaded Items" }
            div { class: "field",
                label { "Search by Item or Port" }
                input {
                    r#type: "search",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }
            {listing}
        }
    }
}
