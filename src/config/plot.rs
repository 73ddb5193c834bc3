//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub actual_price_color: Color32,
    pub fitted_price_color: Color32,
    pub forecast_color: Color32,

    /// Width of the actual/fitted price lines
    pub line_width: f32,
    /// Radius of the per-observation markers on the actual series
    pub actual_marker_radius: f32,
    /// Radius of the forecast cross
    pub forecast_marker_radius: f32,
    /// Dash length of the fitted series
    pub fitted_dash_length: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_x_padding: f64,     // In observations, added left and right

    // --- SEMANTIC COLORS ---
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_loss: Color32,
    pub color_profit: Color32,

    pub color_text_neutral: Color32, // Main values (white)
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // Matplotlib default cycle, so the chart reads the same as the notebook plots
    actual_price_color: Color32::from_rgb(31, 119, 180), // Tab Blue
    fitted_price_color: Color32::from_rgb(255, 127, 14), // Tab Orange
    forecast_color: Color32::from_rgb(255, 0, 0),        // Red

    line_width: 1.5,
    actual_marker_radius: 3.0,
    forecast_marker_radius: 8.0,
    fitted_dash_length: 8.0,

    plot_y_padding_pct: 0.05,
    plot_x_padding: 1.0,

    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
    color_warning: Color32::from_rgb(255, 215, 0), // Gold/Yellow
    color_loss: Color32::from_rgb(255, 80, 80),
    color_profit: Color32::from_rgb(100, 255, 100),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
