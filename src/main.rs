mod app;
mod chart;
mod color;
mod config;
mod data;
mod labels;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use app::HeartDashApp;
use config::{DashboardConfig, WINDOW_TITLE};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dataset is read once and shared read-only for the whole session.
    let dataset = data::loader::load_file(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))
        .inspect_err(|e| log::error!("Failed to load dataset: {e:#}"))?;
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(HeartDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
