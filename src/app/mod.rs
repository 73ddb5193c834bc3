mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, BootstrapState, FailedState, RunningState};

pub use root::App;
