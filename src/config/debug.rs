//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Dataset cache hits/misses and load timings.
    pub log_dataset: bool,

    /// Scenario switches and field edits in the forecast session.
    pub log_selection: bool,

    /// Every forecast computed (value + inputs).
    pub log_prediction: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_dataset: true,
    log_selection: false,
    log_prediction: true,
    log_performance: false,
};

/// Read by `trace_time!` (macro needs a plain const path).
pub const LOG_PERFORMANCE: bool = DF.log_performance;
