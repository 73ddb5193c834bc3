use eframe::egui::{Context, Grid, Order, RichText, Ui, Window};

use crate::config::PLOT_CONFIG;
use crate::engine::ForecastSession;
use crate::models::ForecastReport;
use crate::ui::UI_CONFIG;
use crate::ui::styles::{UiStyleExt, get_fit_color};
use crate::ui::ui_text::UI_TEXT;

/// Title, scenario narrative and the forecast statement of the last Predict.
pub(crate) fn render_forecast_header(
    ui: &mut Ui,
    session: &ForecastSession,
    report: Option<&ForecastReport>,
) {
    ui.heading(
        RichText::new(&UI_TEXT.app_title)
            .size(22.0)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.label_subdued(&UI_TEXT.app_subtitle);
    ui.add_space(8.0);

    // Manual Input has no narrative
    if !session.scenario().is_manual() {
        UI_CONFIG.info_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&UI_TEXT.cp_description).strong());
            ui.label(RichText::new(session.description()).color(PLOT_CONFIG.color_info));
        });
        ui.add_space(8.0);
    }

    match report {
        Some(report) => {
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    UI_TEXT.cp_forecast_prefix,
                    report.forecast.statement()
                ))
                .size(18.0)
                .strong()
                .color(PLOT_CONFIG.color_text_primary),
            );
        }
        None => {
            ui.label(
                RichText::new(&UI_TEXT.cp_press_predict)
                    .italics()
                    .color(PLOT_CONFIG.color_text_subdued),
            );
        }
    }
    ui.add_space(8.0);
}

pub(crate) fn render_status_bar(
    ui: &mut Ui,
    session: &ForecastSession,
    report: Option<&ForecastReport>,
) {
    ui.horizontal(|ui| {
        let Some(history) = session.history() else {
            ui.label_subdued(&UI_TEXT.sb_no_history);
            return;
        };

        ui.metric(
            &UI_TEXT.sb_rows,
            &history.len().to_string(),
            PLOT_CONFIG.color_text_neutral,
        );
        if let Some(source) = history.source() {
            ui.separator();
            ui.metric(
                &UI_TEXT.sb_source,
                &source.display().to_string(),
                PLOT_CONFIG.color_text_neutral,
            );
        }

        if let Some(fit) = report.and_then(|r| r.fit) {
            ui.separator();
            ui.metric(
                &UI_TEXT.sb_rmse,
                &format!("{:.2}", fit.rmse),
                PLOT_CONFIG.color_text_neutral,
            );
            ui.metric(
                &UI_TEXT.sb_mae,
                &format!("{:.2}", fit.mae),
                PLOT_CONFIG.color_text_neutral,
            );
            ui.metric(
                &UI_TEXT.sb_r_squared,
                &format!("{:.3}", fit.r_squared),
                get_fit_color(fit.r_squared),
            );
        }
    });
}

pub(crate) fn render_help_window(ctx: &Context, open: &mut bool) {
    Window::new(&UI_TEXT.help_title)
        .open(open)
        .resizable(false)
        .order(Order::Tooltip) // Plot draws on Order::Foreground, so stay above it
        .collapsible(false)
        .default_width(400.0)
        .show(ctx, |ui| {
            ui.heading(&UI_TEXT.help_heading);
            ui.add_space(10.0);

            Grid::new("general_shortcuts_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .striped(true)
                .show(ui, |ui| {
                    render_shortcut_rows(ui, UI_TEXT.help_shortcuts);
                });
        });
}

fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
    for (key, description) in rows {
        ui.label(RichText::new(*key).monospace().strong());
        ui.label(*description);
        ui.end_row();
    }
}
