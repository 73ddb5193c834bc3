use {
    crate::{
        data::HistoricalDataset,
        domain::{InputVector, PREDICTOR_COUNT, Predictor},
    },
    strum::IntoEnumIterator,
};

/// `price = intercept + Σ coefficient[p] * input[p]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    intercept: f64,
    coefficients: [f64; PREDICTOR_COUNT],
}

impl LinearModel {
    /// Coefficients must be given in `Predictor` order.
    pub const fn new(intercept: f64, coefficients: [f64; PREDICTOR_COUNT]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[inline]
    pub fn coefficient(&self, predictor: Predictor) -> f64 {
        self.coefficients[predictor.index()]
    }

    /// The one place the linear formula lives. Both single forecasts and the fitted
    /// history go through here so they can never disagree.
    /// Terms are summed in coefficient-table order, then added to the intercept.
    #[inline]
    pub fn predict(&self, inputs: &InputVector) -> f64 {
        self.intercept
            + Predictor::iter()
                .map(|p| inputs[p] * self.coefficient(p))
                .sum::<f64>()
    }

    /// Fitted value per historical row, in row order.
    pub fn fit_series(&self, dataset: &HistoricalDataset) -> Vec<f64> {
        crate::trace_time!("Fit series", 1000, {
            dataset
                .rows()
                .iter()
                .map(|row| self.predict(&row.inputs))
                .collect()
        })
    }
}
