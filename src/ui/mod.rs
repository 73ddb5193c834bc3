mod plot_layers;
mod screens;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
mod ui_text;

pub(crate) use screens::{render_bootstrap, render_load_failure};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{PanelEvent, ScenarioPanel};
pub(crate) use ui_plot_view::PlotView;
pub(crate) use ui_render::{render_forecast_header, render_help_window, render_status_bar};
