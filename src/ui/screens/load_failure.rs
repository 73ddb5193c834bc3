use {
    crate::{app::FailedState, config::PLOT_CONFIG, ui::UI_TEXT},
    eframe::egui::{CentralPanel, Context, RichText, ViewportCommand},
};

/// Shown instead of the forecasting UI when the historical dataset can't be read.
pub(crate) fn render_load_failure(ctx: &Context, state: &FailedState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(&UI_TEXT.error_load_title)
                    .size(22.0)
                    .strong()
                    .color(PLOT_CONFIG.color_loss),
            );
            ui.add_space(10.0);
            ui.label(
                RichText::new(state.path.display().to_string())
                    .monospace()
                    .color(PLOT_CONFIG.color_text_primary),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(&state.message).color(PLOT_CONFIG.color_warning));
            ui.add_space(10.0);
            ui.label(RichText::new(&UI_TEXT.error_load_body).color(PLOT_CONFIG.color_text_subdued));
            ui.add_space(20.0);
            if ui.button(&UI_TEXT.error_quit).clicked() {
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        });
    });
}
