use rentscope::application::prediction::PredictionService;
use rentscope::config::Config;
use rentscope::infrastructure::{artifacts, dataset};
use rentscope::interfaces::app::RentScopeApp;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("RentScope {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    // Artifact loading failures are fatal: without the fitted model and
    // encoder there is nothing to serve.
    let encoder = artifacts::load_encoder(&config.encoder_path)?;
    let model = artifacts::load_model(&config.model_path)?;
    let service = PredictionService::new(encoder, model)?;

    let rentals = dataset::load_rentals(&config.dataset_path)?;

    let app = RentScopeApp::new(service, &rentals);

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "RentScope",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start UI: {}", e))?;

    Ok(())
}
