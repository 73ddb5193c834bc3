use std::hash::{DefaultHasher, Hash, Hasher};
use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{AxisHints, HPlacement, Legend, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{ForecastReport, format_price};
use crate::ui::UI_CONFIG;
use crate::ui::plot_layers::{
    ActualPriceLayer, FittedPriceLayer, ForecastPointLayer, LayerContext, PlotLayer,
};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::{min_max, padded_range};

/// View window for one report. Recomputed only when the report changes.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotCache {
    pub report_hash: u64,
    pub x_range: RangeInclusive<f64>,
    pub y_range: RangeInclusive<f64>,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_forecast_plot(&mut self, ui: &mut Ui, report: &ForecastReport) {
        let cache = self.calculate_bounds(report).clone();
        let forecast_x = report.forecast_index() as f64;

        Plot::new("epc_forecast_plot")
            .height(ui.available_height().max(UI_CONFIG.plot_min_height))
            .legend(Legend::default())
            .x_axis_label(&UI_TEXT.plot_x_axis)
            .custom_y_axes(vec![create_y_axis()])
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(cache.x_range.clone());
                plot_ui.set_plot_bounds_y(cache.y_range.clone());

                // --- LAYER STACK ---
                let ctx = LayerContext {
                    history: &report.history,
                    forecast: report.forecast,
                    forecast_x,
                };

                let layers: [&dyn PlotLayer; 3] =
                    [&ActualPriceLayer, &FittedPriceLayer, &ForecastPointLayer];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn calculate_bounds(&mut self, report: &ForecastReport) -> &PlotCache {
        let hash = report_hash(report);
        if self.cache.as_ref().map(|c| c.report_hash) != Some(hash) {
            self.cache = Some(plot_window(report, hash));
        }
        self.cache.get_or_insert_with(|| plot_window(report, hash))
    }
}

fn report_hash(report: &ForecastReport) -> u64 {
    let mut hasher = DefaultHasher::new();
    report.history.len().hash(&mut hasher);
    report.forecast.value().to_bits().hash(&mut hasher);
    for p in &report.history {
        p.actual.to_bits().hash(&mut hasher);
        p.fitted.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

/// X spans every observation plus the forecast slot; Y spans actual, fitted and forecast values.
fn plot_window(report: &ForecastReport, report_hash: u64) -> PlotCache {
    let mut ys: Vec<f64> = Vec::with_capacity(report.history.len() * 2 + 1);
    ys.extend(report.history.iter().flat_map(|p| [p.actual, p.fitted]));
    ys.push(report.forecast.value());
    ys.retain(|y| y.is_finite());

    let forecast = report.forecast.value();
    let (y_min, y_max) = min_max(&ys).unwrap_or((forecast, forecast));
    let (y_lo, y_hi) = padded_range(y_min, y_max, PLOT_CONFIG.plot_y_padding_pct);

    let x_max = report.forecast_index() as f64;
    PlotCache {
        report_hash,
        x_range: -PLOT_CONFIG.plot_x_padding..=x_max + PLOT_CONFIG.plot_x_padding,
        y_range: y_lo..=y_hi,
    }
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(&UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ForecastSession;
    use crate::models::FittedPoint;

    fn report_with(history: Vec<FittedPoint>) -> ForecastReport {
        let mut report = ForecastSession::default().report();
        report.history = history;
        report
    }

    #[test]
    fn window_covers_history_and_forecast() {
        let report = report_with(vec![
            FittedPoint { index: 0, actual: 20.0, fitted: 25.0 },
            FittedPoint { index: 1, actual: 40.0, fitted: 35.0 },
        ]);
        let window = plot_window(&report, 0);

        assert_eq!(*window.x_range.start(), -PLOT_CONFIG.plot_x_padding);
        assert_eq!(*window.x_range.end(), 2.0 + PLOT_CONFIG.plot_x_padding);
        // forecast (~54.42) is above every historical point
        assert!(*window.y_range.end() > report.forecast.value());
        assert!(*window.y_range.start() < 20.0);
    }

    #[test]
    fn forecast_only_window_has_height() {
        let report = report_with(Vec::new());
        let window = plot_window(&report, 0);
        assert!(window.y_range.start() < window.y_range.end());
        assert_eq!(*window.x_range.end(), PLOT_CONFIG.plot_x_padding);
    }

    #[test]
    fn cache_tracks_report_changes() {
        let mut view = PlotView::new();
        let a = report_with(vec![FittedPoint { index: 0, actual: 10.0, fitted: 12.0 }]);
        let b = report_with(vec![FittedPoint { index: 0, actual: 90.0, fitted: 12.0 }]);

        let first = view.calculate_bounds(&a).clone();
        assert_eq!(view.calculate_bounds(&a), &first);
        assert_ne!(view.calculate_bounds(&b).y_range, first.y_range);
    }
}
