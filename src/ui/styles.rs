use {
    crate::{config::PLOT_CONFIG, ui::UI_CONFIG},
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Green for a good fit, amber for a middling one, red for a poor one.
pub fn get_fit_color(r_squared: f64) -> Color32 {
    if r_squared.is_nan() {
        PLOT_CONFIG.color_text_subdued
    } else if r_squared >= 0.8 {
        PLOT_CONFIG.color_profit
    } else if r_squared >= 0.5 {
        PLOT_CONFIG.color_warning
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::GREEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_color_bands() {
        assert_eq!(get_fit_color(0.95), PLOT_CONFIG.color_profit);
        assert_eq!(get_fit_color(0.6), PLOT_CONFIG.color_warning);
        assert_eq!(get_fit_color(0.1), PLOT_CONFIG.color_loss);
        assert_eq!(get_fit_color(f64::NAN), PLOT_CONFIG.color_text_subdued);
    }
}
