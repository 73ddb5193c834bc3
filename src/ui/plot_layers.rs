use egui_plot::{Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{FittedPoint, Forecast};
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub history: &'a [FittedPoint],
    pub forecast: Forecast,
    /// x of the forecast point: one past the last observation
    pub forecast_x: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. ACTUAL PRICE (solid line with a marker per observation)
// ============================================================================
pub struct ActualPriceLayer;

impl PlotLayer for ActualPriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.history.is_empty() {
            return;
        }
        let points: Vec<[f64; 2]> = ctx
            .history
            .iter()
            .map(|p| [p.index as f64, p.actual])
            .collect();

        plot_ui.line(
            Line::new(&UI_TEXT.plot_legend_actual, PlotPoints::new(points.clone()))
                .color(PLOT_CONFIG.actual_price_color)
                .width(PLOT_CONFIG.line_width),
        );
        // Same legend name so the markers toggle together with the line
        plot_ui.points(
            Points::new(&UI_TEXT.plot_legend_actual, PlotPoints::new(points))
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(PLOT_CONFIG.actual_marker_radius)
                .color(PLOT_CONFIG.actual_price_color),
        );
    }
}

// ============================================================================
// 2. FITTED PRICE (dashed, model reconstruction of history)
// ============================================================================
pub struct FittedPriceLayer;

impl PlotLayer for FittedPriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.history.is_empty() {
            return;
        }
        let points: Vec<[f64; 2]> = ctx
            .history
            .iter()
            .map(|p| [p.index as f64, p.fitted])
            .collect();

        plot_ui.line(
            Line::new(&UI_TEXT.plot_legend_fitted, PlotPoints::new(points))
                .color(PLOT_CONFIG.fitted_price_color)
                .width(PLOT_CONFIG.line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.fitted_dash_length,
                }),
        );
    }
}

// ============================================================================
// 3. FORECAST (single red cross)
// ============================================================================
pub struct ForecastPointLayer;

impl PlotLayer for ForecastPointLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        plot_ui.points(
            Points::new(
                &UI_TEXT.plot_legend_forecast,
                PlotPoints::new(vec![[ctx.forecast_x, ctx.forecast.value()]]),
            )
            .shape(MarkerShape::Cross)
            .radius(PLOT_CONFIG.forecast_marker_radius)
            .color(PLOT_CONFIG.forecast_color),
        );
    }
}
