use eframe::egui::{Align, Button, DragValue, Grid, Layout, RichText, ScrollArea, Ui};
use strum::IntoEnumIterator;

use crate::domain::Predictor;
use crate::engine::ForecastSession;
use crate::models::Scenario;

use crate::ui::UI_CONFIG;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::UI_TEXT;

/// What the left panel asks the app to do after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelEvent {
    #[default]
    None,
    /// A scenario switch, a field edit or a reset. Any shown forecast is now stale.
    InputsChanged,
    Predict,
}

impl PanelEvent {
    /// Predict wins over a change in the same frame.
    fn merge(self, other: PanelEvent) -> PanelEvent {
        match (self, other) {
            (PanelEvent::Predict, _) | (_, PanelEvent::Predict) => PanelEvent::Predict,
            (PanelEvent::InputsChanged, _) | (_, PanelEvent::InputsChanged) => {
                PanelEvent::InputsChanged
            }
            _ => PanelEvent::None,
        }
    }
}

pub struct ScenarioPanel<'a> {
    session: &'a mut ForecastSession,
}

impl<'a> ScenarioPanel<'a> {
    pub fn new(session: &'a mut ForecastSession) -> Self {
        Self { session }
    }

    pub fn render(&mut self, ui: &mut Ui) -> PanelEvent {
        let mut event = PanelEvent::None;

        ui.add_space(10.0);
        ui.heading(&UI_TEXT.lp_heading);
        ui.separator();

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                event = event.merge(self.scenario_selector(ui));
                ui.add_space(10.0);
                ui.separator();
                event = event.merge(self.input_grid(ui));
                ui.add_space(10.0);
                event = event.merge(self.action_buttons(ui));
            });

        event
    }

    fn scenario_selector(&mut self, ui: &mut Ui) -> PanelEvent {
        let mut event = PanelEvent::None;
        ui.label_subheader(&UI_TEXT.lp_choose_scenario);
        ui.add_space(4.0);

        let active = self.session.scenario();
        for scenario in Scenario::iter() {
            if ui.radio(active == scenario, scenario.label()).clicked()
                && self.session.select_scenario(scenario)
            {
                event = PanelEvent::InputsChanged;
            }
        }
        event
    }

    fn input_grid(&mut self, ui: &mut Ui) -> PanelEvent {
        let mut event = PanelEvent::None;

        ui.horizontal(|ui| {
            ui.label_subheader(&UI_TEXT.lp_inputs_heading);
            if self.session.has_edits() {
                ui.label_subdued(&UI_TEXT.lp_edited);
            }
        });
        ui.add_space(4.0);

        Grid::new("epc_inputs_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for predictor in Predictor::iter() {
                    ui.label(predictor.column())
                        .on_hover_text(predictor.description());

                    let mut value = self.session.inputs()[predictor];
                    let response = ui.add_sized(
                        [UI_CONFIG.input_field_width, ui.spacing().interact_size.y],
                        DragValue::new(&mut value)
                            .speed(predictor.drag_speed())
                            .min_decimals(2)
                            .max_decimals(4),
                    );
                    if response.changed() {
                        self.session.edit(predictor, value);
                        event = PanelEvent::InputsChanged;
                    }
                    ui.end_row();
                }
            });

        event
    }

    fn action_buttons(&mut self, ui: &mut Ui) -> PanelEvent {
        let mut event = PanelEvent::None;

        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            let predict = ui.button(ui.button_text_primary(&UI_TEXT.lp_predict));
            if predict.clicked() {
                event = PanelEvent::Predict;
            }

            let reset = ui
                .add_enabled(
                    self.session.has_edits(),
                    Button::new(RichText::new(&UI_TEXT.lp_reset).small()),
                )
                .on_hover_text(&UI_TEXT.lp_reset_hover);
            if reset.clicked() {
                self.session.reset_inputs();
                event = event.merge(PanelEvent::InputsChanged);
            }
        });

        event
    }
}
