//! Configuration module for the EPC forecast application.

// Can all be private now because we have a public re-export.
mod debug;
mod model;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::{DF, LOG_PERFORMANCE};
pub use model::{
    ACTUAL_PRICE_COLUMN, BASE_DEFAULTS, DISPLAY_DECIMALS, EPC_MODEL, PRICE_UNIT,
};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
