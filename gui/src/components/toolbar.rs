// Toolbar: store totals and the CSV export action.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::utils::format_money;

use crate::services::engine_client::EngineClient;
use crate::state::app_state::AppState;

#[component]
pub fn Toolbar() -> Element {
    let client = use_context::<EngineClient>();
    let app_state = use_context::<AppState>();

    let stats_client = client.clone();
    let stats = use_resource(move || {
        let client = stats_client.clone();
        let _ = app_state.current_revision();
        async move { client.stats().await }
    });

    let summary = match &*stats.read_unchecked() {
        Some(Ok(s)) => format!(
            "{} items · valued {} · {} financed",
            s.count,
            format_money(s.total_valued_price),
            s.financed_count
        ),
        Some(Err(msg)) => msg.clone(),
        None => "Loading…".to_string(),
    };

    let export = move |_| {
        let client = client.clone();
        spawn(async move {
            match client.export_csv().await {
                Ok((count, path)) => app_state.success(format!("Exported {} items to {}", count, path.display())),
                Err(msg) => app_state.error(msg),
            }
        });
    };

    rsx! {
        div { class: "toolbar",
            span { "{summary}" }
            button { onclick: export, "Export CSV" }
        }
    }
}
