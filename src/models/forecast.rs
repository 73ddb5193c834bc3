use {
    crate::{
        config::{DISPLAY_DECIMALS, PRICE_UNIT},
        domain::InputVector,
        models::{FitSummary, Scenario},
    },
    serde::Serialize,
    std::fmt,
};

/// A model output in CAD per ton. Full precision is kept; rounding happens only in `Display`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Forecast(f64);

impl Forecast {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// "54.42"
    pub fn rounded(self) -> String {
        format_price(self.0)
    }

    /// "Forecasted EPC Price: 54.42 CAD per ton"
    pub fn statement(self) -> String {
        format!("Forecasted EPC Price: {} {}", self.rounded(), PRICE_UNIT)
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rounded(), PRICE_UNIT)
    }
}

pub fn format_price(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, value)
}

/// One historical point with its model reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FittedPoint {
    pub index: usize,
    pub actual: f64,
    pub fitted: f64,
}

/// Everything the presentation layer needs after a Predict action.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub scenario: Scenario,
    pub description: &'static str,
    pub inputs: InputVector,
    pub forecast: Forecast,
    pub history: Vec<FittedPoint>,
    pub fit: Option<FitSummary>,
}

impl ForecastReport {
    /// x coordinate of the forecast point: one past the last observation.
    pub fn forecast_index(&self) -> usize {
        self.history.len()
    }
}
