use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForecastError>;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("failed to open dataset {path}: {source}")]
    DatasetOpen {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {path} has no column named '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("dataset {path}, row {row}, column '{column}': '{value}' is not a number")]
    BadCell {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("invalid scenario selection: '{name}'")]
    UnknownScenario { name: String },

    #[error("unknown predictor: '{name}'")]
    UnknownPredictor { name: String },

    #[error("input vector is missing predictor '{column}'")]
    MissingPredictor { column: &'static str },
}
