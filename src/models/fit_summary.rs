use {serde::Serialize, statrs::statistics::Statistics};

use crate::models::FittedPoint;

/// In-sample goodness of fit of the fitted history against observed prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitSummary {
    pub observations: usize,
    pub rmse: f64,
    pub mae: f64,
    /// 1 - SS_res / SS_tot. NaN when the actual series is constant.
    pub r_squared: f64,
}

impl FitSummary {
    /// None for an empty history.
    pub fn from_points(points: &[FittedPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let residuals: Vec<f64> = points.iter().map(|p| p.actual - p.fitted).collect();
        let squared: Vec<f64> = residuals.iter().map(|r| r * r).collect();
        let absolute: Vec<f64> = residuals.iter().map(|r| r.abs()).collect();

        let actual_mean = points.iter().map(|p| p.actual).mean();
        let ss_tot: f64 = points
            .iter()
            .map(|p| (p.actual - actual_mean).powi(2))
            .sum();
        let ss_res: f64 = squared.iter().sum();

        let r_squared = if ss_tot > 0.0 {
            1.0 - ss_res / ss_tot
        } else {
            f64::NAN
        };

        Some(Self {
            observations: points.len(),
            rmse: squared.mean().sqrt(),
            mae: absolute.mean(),
            r_squared,
        })
    }
}
