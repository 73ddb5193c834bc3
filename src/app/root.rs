use {
    eframe::{
        Frame,
        egui::{CentralPanel, Context, Key, SidePanel, TopBottomPanel, Visuals},
    },
    std::{mem, path::PathBuf},
};

use crate::{
    Cli,
    app::{AppState, BootstrapState, FailedState, PhaseView, RunningState},
    data::load_dataset,
    engine::ForecastSession,
    models::ForecastReport,
    ui::{
        PanelEvent, PlotView, ScenarioPanel, UI_CONFIG, render_bootstrap, render_forecast_header,
        render_help_window, render_status_bar,
    },
};

pub struct App {
    pub(crate) session: ForecastSession,
    /// Result of the last Predict action. Dropped whenever an input changes.
    pub(crate) report: Option<ForecastReport>,
    pub(crate) data_path: PathBuf,
    pub(crate) plot_view: PlotView,
    pub(crate) show_help: bool,
    state: AppState,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        Self::from_args(args)
    }

    pub(crate) fn from_args(args: Cli) -> Self {
        let mut session = ForecastSession::default();
        session.select_scenario(args.scenario);

        log::info!(
            "Starting with scenario '{}' and dataset {}",
            args.scenario,
            args.data.display()
        );

        Self {
            session,
            report: None,
            data_path: args.data,
            plot_view: PlotView::new(),
            show_help: false,
            state: AppState::Bootstrapping(BootstrapState::default()),
        }
    }

    pub(crate) fn tick_bootstrap_state(
        &mut self,
        ctx: &Context,
        state: &mut BootstrapState,
    ) -> AppState {
        // Paint one frame so the loading screen is visible before the blocking read.
        if state.frames_shown == 0 {
            state.frames_shown += 1;
            render_bootstrap(ctx, &self.data_path);
            ctx.request_repaint();
            return AppState::Bootstrapping(state.clone());
        }

        // Keep the loading screen up while the blocking read runs.
        render_bootstrap(ctx, &self.data_path);
        ctx.request_repaint();
        match load_dataset(&self.data_path) {
            Ok(history) => {
                self.session.attach_history(history);
                AppState::Running(RunningState)
            }
            Err(err) => {
                log::error!("Dataset load failed: {}", err);
                AppState::Failed(FailedState {
                    path: self.data_path.clone(),
                    message: err.to_string(),
                })
            }
        }
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        self.handle_global_shortcuts(ctx);

        let event = SidePanel::left("scenario_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .resizable(false)
            .min_width(260.0)
            .show(ctx, |ui| ScenarioPanel::new(&mut self.session).render(ui))
            .inner;
        self.apply_panel_event(event);

        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                render_status_bar(ui, &self.session, self.report.as_ref());
            });

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                render_forecast_header(ui, &self.session, self.report.as_ref());
                if let Some(report) = &self.report {
                    self.plot_view.show_forecast_plot(ui, report);
                }
            });

        render_help_window(ctx, &mut self.show_help);
    }

    fn apply_panel_event(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::None => {}
            PanelEvent::InputsChanged => self.report = None,
            PanelEvent::Predict => self.predict(),
        }
    }

    pub(crate) fn predict(&mut self) {
        self.report = Some(self.session.report());
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // If the user is typing in a field, don't trigger global hotkeys.
            return;
        }

        let (predict, reset, toggle_help, close_help) = ctx.input(|i| {
            (
                i.key_pressed(Key::Enter),
                i.key_pressed(Key::R),
                i.key_pressed(Key::H),
                i.key_pressed(Key::Escape),
            )
        });

        if predict {
            self.predict();
        }
        if reset && self.session.has_edits() {
            self.session.reset_inputs();
            self.report = None;
        }
        if toggle_help {
            self.show_help = !self.show_help;
        }
        if close_help {
            self.show_help = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
