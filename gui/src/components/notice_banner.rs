#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::state::app_state::{AppState, Notice};

#[component]
pub fn NoticeBanner() -> Element {
    let app_state = use_context::<AppState>();
    let notice = (app_state.notice)();

    match notice {
        Some(Notice::Success(text)) => rsx! {
            p { class: "notice-success", onclick: move |_| app_state.clear_notice(), "✅ {text}" }
        },
        Some(Notice::Error(text)) => rsx! {
            p { class: "notice-error", onclick: move |_| app_state.clear_notice(), "⚠️ {text}" }
        },
        None => rsx! {},
    }
}
