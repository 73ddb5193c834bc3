use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use approx::assert_relative_eq;
use strum::IntoEnumIterator;
use tempfile::NamedTempFile;

use epc_forecast::config::BASE_DEFAULTS;
use epc_forecast::{
    EPC_MODEL, ForecastError, ForecastSession, HistoricalDataset, Predictor, Scenario,
    load_dataset,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/observations.csv")
}

#[test]
fn fixture_loads_with_extra_columns_ignored() {
    let history = HistoricalDataset::load(fixture()).unwrap();

    assert_eq!(history.len(), 6);
    assert_eq!(history.columns()[0], "Date");
    assert_eq!(history.rows()[0].index, 0);
    assert_eq!(history.rows()[5].index, 5);
    assert_eq!(history.rows()[3].inputs[Predictor::OilPrice], 63.9);
    assert_eq!(
        history.actual_prices().collect::<Vec<_>>(),
        vec![21.5, 23.0, 24.8, 29.9, 31.2, 33.4]
    );
}

#[test]
fn manual_defaults_predict_the_closed_form_value() {
    let session = ForecastSession::default();
    let forecast = session.predict();

    let by_hand = EPC_MODEL.intercept()
        + Predictor::iter()
            .map(|p| BASE_DEFAULTS[p] * EPC_MODEL.coefficient(p))
            .sum::<f64>();
    assert_eq!(forecast.value(), by_hand);
    assert_relative_eq!(forecast.value(), 54.4233922, epsilon = 1e-6);
    assert_eq!(
        forecast.statement(),
        "Forecasted EPC Price: 54.42 CAD per ton"
    );
}

#[test]
fn scenario_switch_then_edit_end_to_end() {
    let history = load_dataset(fixture()).unwrap();
    let mut session = ForecastSession::default().with_history(history.clone());

    session.edit(Predictor::EuCarbonPrice, 500.0);
    let fitted_before = session.fitted_history();

    session.select_scenario(Scenario::EnergyCrisis);
    let crisis = Scenario::EnergyCrisis.seed_inputs();
    assert_eq!(session.inputs(), &crisis);

    session.edit(Predictor::OilPrice, 150.0);
    for p in Predictor::iter().filter(|&p| p != Predictor::OilPrice) {
        assert_eq!(session.inputs()[p], crisis[p]);
    }

    let report = session.report();
    assert_eq!(report.scenario, Scenario::EnergyCrisis);
    assert_eq!(report.description, Scenario::EnergyCrisis.description());
    assert_eq!(report.inputs[Predictor::OilPrice], 150.0);
    assert_eq!(report.forecast_index(), history.len());

    // History never depends on what the user typed
    assert_eq!(report.history, fitted_before);
    for (point, row) in report.history.iter().zip(history.rows()) {
        assert_eq!(point.fitted, EPC_MODEL.predict(&row.inputs));
        assert_eq!(point.actual, row.monthly_price);
    }

    let fit = report.fit.unwrap();
    assert_eq!(fit.observations, 6);
    assert!(fit.rmse >= fit.mae);
}

#[test]
fn repeated_loads_share_one_dataset() {
    let first = load_dataset(fixture()).unwrap();
    let second = load_dataset(fixture()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn dataset_without_price_column_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "EU_cPrice,AcitivityIndex,Oil_Price,NatGas_Price,ER_USCAD,carbon.credit,carbon.price,alberta.carbon"
    )
    .unwrap();
    writeln!(file, "75,295,80,3.5,1.33,30,30,20").unwrap();

    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::MissingColumn {
            column: "MonthlyPrice",
            ..
        }
    ));
}

#[test]
fn missing_file_is_an_error_not_an_empty_dataset() {
    let err = load_dataset("definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, ForecastError::DatasetOpen { .. }));
}

#[test]
fn scenario_lookup_by_label_and_name() {
    assert_eq!(
        "🔥 Energy Crisis".parse::<Scenario>().unwrap(),
        Scenario::EnergyCrisis
    );
    assert_eq!(
        "Climate Fatigue".parse::<Scenario>().unwrap(),
        Scenario::ClimateFatigue
    );
    assert!(matches!(
        Scenario::resolve("Boom Times"),
        Err(ForecastError::UnknownScenario { .. })
    ));
    assert_eq!(Scenario::resolve("Manual Input").unwrap().description, "");
}
