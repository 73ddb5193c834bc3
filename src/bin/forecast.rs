use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

use epc_forecast::{
    ForecastReport, ForecastSession, Predictor, Scenario, load_dataset, models::format_price,
};

/// Headless EPC price forecast: same model and scenarios as the desktop app.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Historical observations CSV. Without it only the forecast is computed (no fit summary).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Scenario by label or bare name, e.g. "Energy Crisis"
    #[arg(long, default_value = "Manual Input")]
    scenario: Scenario,

    /// Override one input after the scenario is applied, e.g. --set Oil_Price=150
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    overrides: Vec<(Predictor, f64)>,

    /// Print the report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also print actual vs fitted price for every observation
    #[arg(long, default_value_t = false)]
    history: bool,
}

fn parse_assignment(s: &str) -> Result<(Predictor, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let predictor = Predictor::from_column(name.trim()).map_err(|e| e.to_string())?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((predictor, value))
}

#[derive(Tabled)]
struct InputRow {
    #[tabled(rename = "Input")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: f64,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Observation")]
    index: usize,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Fitted")]
    fitted: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut session = ForecastSession::default();
    session.select_scenario(args.scenario);
    for &(predictor, value) in &args.overrides {
        session.edit(predictor, value);
    }

    if let Some(path) = &args.data {
        let history = load_dataset(path)
            .with_context(|| format!("Failed to load historical data from {}", path.display()))?;
        session.attach_history(history);
    } else if args.history {
        bail!("--history needs a dataset, pass one with --data");
    }

    let report = session.report();

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    print_report(&report, args.history);
    Ok(())
}

fn print_report(report: &ForecastReport, with_history: bool) {
    println!("Scenario: {}", report.scenario);
    if !report.description.is_empty() {
        println!("{}", report.description);
    }
    println!();

    let inputs: Vec<InputRow> = report
        .inputs
        .iter()
        .map(|(p, value)| InputRow {
            name: p.column(),
            value,
        })
        .collect();
    println!("{}", Table::new(inputs).with(Style::rounded()));
    println!();
    println!("{}", report.forecast.statement());

    if let Some(fit) = report.fit {
        println!(
            "Fit over {} observations: RMSE {:.2}, MAE {:.2}, R² {:.3}",
            fit.observations, fit.rmse, fit.mae, fit.r_squared
        );
    }

    if with_history {
        let rows: Vec<HistoryRow> = report
            .history
            .iter()
            .map(|p| HistoryRow {
                index: p.index,
                actual: format_price(p.actual),
                fitted: format_price(p.fitted),
            })
            .collect();
        println!();
        println!("{}", Table::new(rows).with(Style::rounded()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_parses_column_and_value() {
        assert_eq!(
            parse_assignment("Oil_Price=150").unwrap(),
            (Predictor::OilPrice, 150.0)
        );
        assert_eq!(
            parse_assignment(" ER_USCAD = 1.25 ").unwrap(),
            (Predictor::ExchangeRateUsCad, 1.25)
        );
    }

    #[test]
    fn assignment_rejects_bad_input() {
        assert!(parse_assignment("Oil_Price").is_err());
        assert!(parse_assignment("Oil=150").is_err());
        assert!(parse_assignment("Oil_Price=lots").is_err());
    }

    #[test]
    fn args_accept_repeated_overrides() {
        let args = Args::try_parse_from([
            "forecast",
            "--scenario",
            "Energy Crisis",
            "--set",
            "Oil_Price=150",
            "--set",
            "alberta.carbon=40",
        ])
        .unwrap();
        assert_eq!(args.scenario, Scenario::EnergyCrisis);
        assert_eq!(args.overrides.len(), 2);
        assert!(args.data.is_none());
    }
}
