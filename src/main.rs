mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod reactive;
mod state;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use app::LaunchDashApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    let config = Config::parse();

    let default_level = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    config.validate().context("invalid configuration")?;

    let path = resolve_data_path(&config)?;
    let dataset = match data::loader::load_file(&path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            return Err(e.context(format!("loading {}", path.display())));
        }
    };
    log::info!(
        "Loaded {} launches from {} with sites {:?}",
        dataset.len(),
        path.display(),
        dataset.sites()
    );

    let state = AppState::new(Arc::new(dataset), &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("running dashboard window: {e}"))
}

/// The table path from the command line, or one picked in a file dialog.
fn resolve_data_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.data {
        return Ok(path.clone());
    }
    rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file()
        .context("no launch table selected")
}
