//! Pre-fitted regression constants (Immutable Blueprints)
//! Coefficients come from an offline OLS fit and are never recomputed here.

use crate::{domain::InputVector, models::LinearModel};

/// The EPC price model. Coefficients in `Predictor` order:
/// EU_cPrice, AcitivityIndex, Oil_Price, NatGas_Price, ER_USCAD, carbon.credit, carbon.price, alberta.carbon
pub const EPC_MODEL: LinearModel = LinearModel::new(
    -66.62277,
    [
        0.37549, 0.21220, -0.13564, -0.48151, 25.24684, 0.03298, 0.35388, -0.11811,
    ],
);

/// Seed values for the input fields under "Manual Input".
pub const BASE_DEFAULTS: InputVector =
    InputVector::new([75.0, 295.0, 80.0, 3.5, 1.33, 30.0, 30.0, 20.0]);

/// Display currency suffix for a forecast value.
pub const PRICE_UNIT: &str = "CAD per ton";

/// Column holding the observed price in the dataset.
pub const ACTUAL_PRICE_COLUMN: &str = "MonthlyPrice";

/// Decimal places used when a forecast is shown to the user.
pub const DISPLAY_DECIMALS: usize = 2;
