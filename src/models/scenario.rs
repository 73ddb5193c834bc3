use {
    crate::{
        config::BASE_DEFAULTS,
        domain::InputVector,
        error::{ForecastError, Result},
    },
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
    strum::IntoEnumIterator,
    strum_macros::EnumIter,
};

/// Selector entries, in selector order. `Manual` is the default and applies no preset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter,
)]
pub enum Scenario {
    #[default]
    Manual,
    ClimateAcceleration,
    EnergyCrisis,
    ClimateFatigue,
    GlobalRecessionPressure,
}

/// What a scenario contributes to the session: a full override set (None for manual) and its narrative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioPreset {
    pub overrides: Option<InputVector>,
    pub description: &'static str,
}

impl Scenario {
    /// Bare name, without the selector emoji.
    pub fn name(self) -> &'static str {
        match self {
            Self::Manual => "Manual Input",
            Self::ClimateAcceleration => "Climate Acceleration",
            Self::EnergyCrisis => "Energy Crisis",
            Self::ClimateFatigue => "Climate Fatigue",
            Self::GlobalRecessionPressure => "Global Recession Pressure",
        }
    }

    /// Label as shown on the selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual Input",
            Self::ClimateAcceleration => "🌍 Climate Acceleration",
            Self::EnergyCrisis => "🔥 Energy Crisis",
            Self::ClimateFatigue => "🧊 Climate Fatigue",
            Self::GlobalRecessionPressure => "🌪️ Global Recession Pressure",
        }
    }

    pub fn is_manual(self) -> bool {
        matches!(self, Self::Manual)
    }

    // Every named scenario sets all eight predictors; there are no partial presets.
    pub fn preset(self) -> ScenarioPreset {
        match self {
            Self::Manual => ScenarioPreset {
                overrides: None,
                description: "",
            },
            Self::ClimateAcceleration => ScenarioPreset {
                overrides: Some(InputVector::new([
                    110.0, 285.0, 90.0, 4.5, 1.32, 50.0, 60.0, 40.0,
                ])),
                description: "Tightened EU climate policies, carbon prices surge globally. Alberta faces slight economic slowdown.",
            },
            Self::EnergyCrisis => ScenarioPreset {
                overrides: Some(InputVector::new([
                    90.0, 300.0, 110.0, 6.0, 1.28, 40.0, 45.0, 35.0,
                ])),
                description: "Oil supply shocks drive up energy prices, strong Alberta economy, moderate carbon market stability.",
            },
            // Same numbers as the base defaults: the "nothing changes" baseline.
            Self::ClimateFatigue => ScenarioPreset {
                overrides: Some(InputVector::new([
                    75.0, 295.0, 80.0, 3.5, 1.33, 30.0, 30.0, 20.0,
                ])),
                description: "Weakened global climate commitment, lower carbon pricing attention, stable Alberta economy.",
            },
            Self::GlobalRecessionPressure => ScenarioPreset {
                overrides: Some(InputVector::new([
                    65.0, 275.0, 70.0, 2.8, 1.38, 20.0, 20.0, 15.0,
                ])),
                description: "Global recession fears reduce energy demand and carbon pricing pressure. Stronger USD weakens CAD.",
            },
        }
    }

    pub fn description(self) -> &'static str {
        self.preset().description
    }

    /// Values the input fields are seeded with when this scenario becomes active.
    pub fn seed_inputs(self) -> InputVector {
        self.preset().overrides.unwrap_or(BASE_DEFAULTS)
    }

    /// Looks a scenario up by selector label ("🔥 Energy Crisis") or bare name ("Energy Crisis").
    pub fn resolve(name: &str) -> Result<ScenarioPreset> {
        Ok(name.parse::<Scenario>()?.preset())
    }
}

impl FromStr for Scenario {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Scenario::iter()
            .find(|sc| sc.label() == wanted || sc.name() == wanted)
            .ok_or_else(|| ForecastError::UnknownScenario {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EPC_MODEL;
    use crate::domain::Predictor;

    #[test]
    fn manual_input_has_no_overrides_and_no_description() {
        let preset = Scenario::resolve("Manual Input").unwrap();
        assert_eq!(preset.overrides, None);
        assert_eq!(preset.description, "");
        assert_eq!(Scenario::Manual.seed_inputs(), BASE_DEFAULTS);
    }

    #[test]
    fn named_scenarios_have_full_presets_and_descriptions() {
        for scenario in Scenario::iter().filter(|s| !s.is_manual()) {
            let preset = scenario.preset();
            assert!(preset.overrides.is_some(), "{} has no preset", scenario);
            assert!(!preset.description.is_empty(), "{} has no narrative", scenario);
        }
    }

    const PRESET_TABLE: [(Scenario, [f64; 8], &str); 4] = [
        (
            Scenario::ClimateAcceleration,
            [110.0, 285.0, 90.0, 4.5, 1.32, 50.0, 60.0, 40.0],
            "Tightened EU climate policies, carbon prices surge globally. Alberta faces slight economic slowdown.",
        ),
        (
            Scenario::EnergyCrisis,
            [90.0, 300.0, 110.0, 6.0, 1.28, 40.0, 45.0, 35.0],
            "Oil supply shocks drive up energy prices, strong Alberta economy, moderate carbon market stability.",
        ),
        (
            Scenario::ClimateFatigue,
            [75.0, 295.0, 80.0, 3.5, 1.33, 30.0, 30.0, 20.0],
            "Weakened global climate commitment, lower carbon pricing attention, stable Alberta economy.",
        ),
        (
            Scenario::GlobalRecessionPressure,
            [65.0, 275.0, 70.0, 2.8, 1.38, 20.0, 20.0, 15.0],
            "Global recession fears reduce energy demand and carbon pricing pressure. Stronger USD weakens CAD.",
        ),
    ];

    #[test]
    fn every_preset_row_and_description_is_exact() {
        for (scenario, row, description) in PRESET_TABLE {
            let preset = Scenario::resolve(scenario.label()).unwrap();
            let values = preset.overrides.unwrap();
            for p in Predictor::iter() {
                assert_eq!(
                    values[p].to_bits(),
                    row[p.index()].to_bits(),
                    "{} / {}",
                    scenario,
                    p
                );
            }
            assert_eq!(preset.description, description, "{}", scenario);
        }
    }

    #[test]
    fn scenario_forecasts_are_bit_exact() {
        let expected = [
            (Scenario::Manual, 54.42339220000001_f64),
            (Scenario::ClimateAcceleration, 72.26696380000001),
            (Scenario::EnergyCrisis, 58.447775199999995),
            (Scenario::ClimateFatigue, 54.42339220000001),
            (Scenario::GlobalRecessionPressure, 46.102241199999995),
        ];
        for (scenario, value) in expected {
            let forecast = EPC_MODEL.predict(&scenario.seed_inputs());
            assert_eq!(forecast.to_bits(), value.to_bits(), "{}", scenario);
        }
    }

    #[test]
    fn climate_fatigue_equals_base_defaults() {
        assert_eq!(Scenario::ClimateFatigue.seed_inputs(), BASE_DEFAULTS);
    }

    #[test]
    fn resolves_by_label_or_bare_name() {
        assert_eq!(
            "🧊 Climate Fatigue".parse::<Scenario>().unwrap(),
            Scenario::ClimateFatigue
        );
        assert_eq!(
            "Climate Acceleration".parse::<Scenario>().unwrap(),
            Scenario::ClimateAcceleration
        );
    }

    #[test]
    fn unknown_scenario_fails_loudly() {
        match Scenario::resolve("Sunny Uplands") {
            Err(ForecastError::UnknownScenario { name }) => assert_eq!(name, "Sunny Uplands"),
            other => panic!("expected UnknownScenario, got {:?}", other),
        }
    }

    #[test]
    fn selector_order_starts_with_manual() {
        let labels: Vec<_> = Scenario::iter().map(Scenario::label).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "Manual Input");
        assert_eq!(Scenario::default(), Scenario::Manual);
    }
}
