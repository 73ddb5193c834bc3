#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod models;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use app::App;
pub use config::{EPC_MODEL, PERSISTENCE};
pub use data::{HistoricalDataset, load_dataset};
pub use domain::{InputVector, Predictor};
pub use engine::ForecastSession;
pub use error::{ForecastError, Result};
pub use models::{Forecast, ForecastReport, LinearModel, Scenario};

// CLI argument parsing
use {clap::Parser, std::path::PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Historical observations CSV used for the fitted-history chart
    #[arg(long, default_value = PERSISTENCE.dataset.default_path)]
    pub data: PathBuf,

    /// Scenario selected at startup, by label or bare name (e.g. "Energy Crisis")
    #[arg(long, default_value = "Manual Input")]
    pub scenario: Scenario,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
