// src/app/state.rs

use std::path::PathBuf;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
    Failed(FailedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

/// Waiting to read the dataset. The first frame is rendered before the (blocking) load starts.
#[derive(Default, Clone)]
pub(crate) struct BootstrapState {
    pub(crate) frames_shown: usize,
}

/// Dataset could not be loaded. Terminal for this session.
#[derive(Clone)]
pub(crate) struct FailedState {
    pub(crate) path: PathBuf,
    pub(crate) message: String,
}
