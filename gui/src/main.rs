// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use anyhow::Context;
use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use engine::GoodsIntakeEngine;

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;
use services::engine_client::EngineClient;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Goods Intake GUI (Dioxus Desktop)...");

    let app_config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!("Loaded configuration version {}.", app_config.version);

    // Creates the data and uploads directories before the first request.
    let engine = GoodsIntakeEngine::new(app_config.engine.clone())
        .context("Failed to initialise the intake engine")?;
    let client = EngineClient::new(engine, &app_config.app.export_file_name);

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(app_config.app.window_width, app_config.app.window_height)),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .with_context(client)
        .launch(App);

    tracing::info!("Goods Intake GUI finished.");
    Ok(())
}
