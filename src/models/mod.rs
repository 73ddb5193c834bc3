mod fit_summary;
mod forecast;
mod linear_model;
mod scenario;

pub use {
    fit_summary::FitSummary,
    forecast::{FittedPoint, Forecast, ForecastReport, format_price},
    linear_model::LinearModel,
    scenario::{Scenario, ScenarioPreset},
};
