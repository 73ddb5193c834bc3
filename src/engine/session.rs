use {
    crate::{
        config::{DF, EPC_MODEL},
        data::HistoricalDataset,
        domain::{InputVector, Predictor},
        models::{FitSummary, FittedPoint, Forecast, ForecastReport, LinearModel, Scenario},
    },
    std::sync::Arc,
};

/// The live state of one interactive user: active scenario plus the eight input fields.
///
/// Selecting a different scenario replaces every field with that scenario's seed values.
/// Field edits write exactly one field and survive until the next scenario change.
#[derive(Debug, Clone)]
pub struct ForecastSession {
    model: LinearModel,
    scenario: Scenario,
    inputs: InputVector,
    history: Option<Arc<HistoricalDataset>>,
}

impl Default for ForecastSession {
    fn default() -> Self {
        Self::new(EPC_MODEL)
    }
}

impl ForecastSession {
    pub fn new(model: LinearModel) -> Self {
        let scenario = Scenario::default();
        Self {
            model,
            scenario,
            inputs: scenario.seed_inputs(),
            history: None,
        }
    }

    pub fn with_history(mut self, history: Arc<HistoricalDataset>) -> Self {
        self.attach_history(history);
        self
    }

    /// Fitted-history source. Does not touch the scenario or the input fields.
    pub fn attach_history(&mut self, history: Arc<HistoricalDataset>) {
        self.history = Some(history);
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn inputs(&self) -> &InputVector {
        &self.inputs
    }

    pub fn history(&self) -> Option<&HistoricalDataset> {
        self.history.as_deref()
    }

    pub fn description(&self) -> &'static str {
        self.scenario.description()
    }

    /// Returns true when the selection actually changed (and the fields were re-seeded).
    /// Re-selecting the active scenario keeps the user's edits.
    pub fn select_scenario(&mut self, scenario: Scenario) -> bool {
        if scenario == self.scenario {
            return false;
        }
        if DF.log_selection {
            log::info!("Scenario {} -> {}", self.scenario, scenario);
        }
        self.scenario = scenario;
        self.inputs = scenario.seed_inputs();
        true
    }

    /// Wholesale reset to the active scenario's seed values, discarding edits.
    pub fn reset_inputs(&mut self) {
        self.inputs = self.scenario.seed_inputs();
    }

    pub fn edit(&mut self, predictor: Predictor, value: f64) {
        if DF.log_selection {
            log::info!("Edit {} = {}", predictor, value);
        }
        self.inputs.set(predictor, value);
    }

    /// True if any field differs from the active scenario's seed values.
    pub fn has_edits(&self) -> bool {
        self.inputs != self.scenario.seed_inputs()
    }

    pub fn predict(&self) -> Forecast {
        Forecast::new(self.model.predict(&self.inputs))
    }

    /// Actual vs fitted for every historical row. Empty when no history is attached.
    pub fn fitted_history(&self) -> Vec<FittedPoint> {
        let Some(history) = self.history.as_deref() else {
            return Vec::new();
        };
        history
            .rows()
            .iter()
            .zip(self.model.fit_series(history))
            .map(|(row, fitted)| FittedPoint {
                index: row.index,
                actual: row.monthly_price,
                fitted,
            })
            .collect()
    }

    /// One Predict action: forecast for the current inputs plus the fitted history overlay.
    pub fn report(&self) -> ForecastReport {
        let forecast = self.predict();
        let history = self.fitted_history();
        let fit = FitSummary::from_points(&history);

        if DF.log_prediction {
            log::info!(
                "{} [{}] over {} observations",
                forecast.statement(),
                self.scenario,
                history.len()
            );
        }

        ForecastReport {
            scenario: self.scenario,
            description: self.description(),
            inputs: self.inputs,
            forecast,
            history,
            fit,
        }
    }
}
