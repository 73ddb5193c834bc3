use std::sync::LazyLock;

pub const ICON_CHART: &str = "📈";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_KEYBOARD: &str = "⌨";
pub const ICON_RESET: &str = "⟲";

pub struct UiText {
    // --- Header ---
    pub app_title: String,
    pub app_subtitle: String,

    // --- Left panel ---
    pub lp_heading: String,
    pub lp_choose_scenario: String,
    pub lp_inputs_heading: String,
    pub lp_predict: String,
    pub lp_reset: String,
    pub lp_reset_hover: String,
    pub lp_edited: String,

    // --- Center panel ---
    pub cp_description: String,
    pub cp_forecast_prefix: String,
    pub cp_press_predict: String,

    // --- PLOT LABELS ---
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub plot_legend_actual: String,
    pub plot_legend_fitted: String,
    pub plot_legend_forecast: String,

    // --- Status bar ---
    pub sb_rows: String,
    pub sb_source: String,
    pub sb_no_history: String,
    pub sb_rmse: String,
    pub sb_mae: String,
    pub sb_r_squared: String,

    // --- Loading / failure screens ---
    pub ls_title: String,
    pub ls_reading: String,
    pub error_load_title: String,
    pub error_load_body: String,
    pub error_quit: String,

    // --- Help ---
    pub help_title: String,
    pub help_heading: String,
    pub help_shortcuts: &'static [(&'static str, &'static str)],
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Alberta EPC Price Forecast App".to_string(),
    app_subtitle: "Select a scenario or adjust manually to forecast the EPC price.".to_string(),

    lp_heading: "Scenario or Manual Inputs".to_string(),
    lp_choose_scenario: "Choose a Scenario".to_string(),
    lp_inputs_heading: "Inputs".to_string(),
    lp_predict: "Predict".to_string(),
    lp_reset: format!("{} Reset", ICON_RESET),
    lp_reset_hover: "Restore the selected scenario's values".to_string(),
    lp_edited: "(edited)".to_string(),

    cp_description: "Scenario Description:".to_string(),
    cp_forecast_prefix: ICON_CHART.to_string(),
    cp_press_predict: "Press Predict (or Enter) to forecast the EPC price.".to_string(),

    plot_x_axis: "Observation (Months)".to_string(),
    plot_y_axis: "EPC Price (CAD)".to_string(),
    plot_legend_actual: "Actual Price".to_string(),
    plot_legend_fitted: "Model Fitted Price".to_string(),
    plot_legend_forecast: "Scenario Forecast".to_string(),

    sb_rows: "Observations".to_string(),
    sb_source: "Source".to_string(),
    sb_no_history: "No historical data attached".to_string(),
    sb_rmse: "RMSE".to_string(),
    sb_mae: "MAE".to_string(),
    sb_r_squared: "R²".to_string(),

    ls_title: "Alberta EPC Price Forecast".to_string(),
    ls_reading: "Reading historical observations from".to_string(),
    error_load_title: format!("{} Could not load historical data", ICON_WARNING),
    error_load_body: "Check the path passed with --data and restart the application."
        .to_string(),
    error_quit: "Quit".to_string(),

    help_title: format!("{} Keyboard Shortcuts", ICON_KEYBOARD),
    help_heading: "Keyboard Shortcuts (Press key to execute commands listed)".to_string(),
    help_shortcuts: &[
        ("ENTER", "Predict with the current inputs"),
        ("R", "Reset inputs to the selected scenario"),
        ("H", "Toggle this help panel"),
        ("ESC", "Close this help panel"),
    ],
});
