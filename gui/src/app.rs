#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{IntakeForm, NoticeBanner, ReviewPanel, Toolbar};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::{AppState, Notice};

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let stylesheet = ThemePalette::for_theme(&config.theme()).stylesheet();
    let title = config.app.title.clone();

    let revision = use_signal(|| 0u64);
    let notice = use_signal(|| None::<Notice>);
    use_context_provider(|| AppState::new(revision, notice));

    rsx! {
        style { "{stylesheet}" }
        div { class: "app",
            h1 { "📦 {title}" }
            Toolbar {}
            NoticeBanner {}
            IntakeForm {}
            ReviewPanel {}
        }
    }
}
