use {
    crate::{config::PLOT_CONFIG, ui::UI_TEXT},
    eframe::egui::{CentralPanel, Context, RichText},
    std::path::Path,
};

pub(crate) fn render_bootstrap(ctx: &Context, data_path: &Path) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                RichText::new(&UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    UI_TEXT.ls_reading,
                    data_path.display()
                ))
                .italics()
                .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.add_space(20.0);
            ui.spinner();
        });
    });
}
