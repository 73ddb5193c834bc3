use {
    crate::error::{ForecastError, Result},
    serde::{Deserialize, Serialize},
    std::str::FromStr,
    strum::EnumCount,
    strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr},
};

pub const PREDICTOR_COUNT: usize = Predictor::COUNT;

/// One of the eight regressors of the EPC price model.
/// The strum/serde names are the exact dataset column headers (typos included).
/// Variant order is the coefficient table order, and therefore the summation order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
)]
pub enum Predictor {
    #[strum(serialize = "EU_cPrice")]
    #[serde(rename = "EU_cPrice")]
    EuCarbonPrice,
    #[strum(serialize = "AcitivityIndex")]
    #[serde(rename = "AcitivityIndex")]
    ActivityIndex,
    #[strum(serialize = "Oil_Price")]
    #[serde(rename = "Oil_Price")]
    OilPrice,
    #[strum(serialize = "NatGas_Price")]
    #[serde(rename = "NatGas_Price")]
    NatGasPrice,
    #[strum(serialize = "ER_USCAD")]
    #[serde(rename = "ER_USCAD")]
    ExchangeRateUsCad,
    #[strum(serialize = "carbon.credit")]
    #[serde(rename = "carbon.credit")]
    CarbonCredit,
    #[strum(serialize = "carbon.price")]
    #[serde(rename = "carbon.price")]
    CarbonPrice,
    #[strum(serialize = "alberta.carbon")]
    #[serde(rename = "alberta.carbon")]
    AlbertaCarbon,
}

impl Predictor {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dataset column header for this predictor.
    #[inline]
    pub fn column(self) -> &'static str {
        self.into()
    }

    pub fn from_column(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| ForecastError::UnknownPredictor {
            name: name.to_string(),
        })
    }

    /// Short human description shown as hover text next to the input field.
    pub fn description(self) -> &'static str {
        match self {
            Self::EuCarbonPrice => "EU ETS carbon price (EUR/t)",
            Self::ActivityIndex => "Alberta economic activity index",
            Self::OilPrice => "Crude oil price (USD/bbl)",
            Self::NatGasPrice => "Natural gas price (USD/MMBtu)",
            Self::ExchangeRateUsCad => "USD/CAD exchange rate",
            Self::CarbonCredit => "Carbon credit price",
            Self::CarbonPrice => "Carbon price",
            Self::AlbertaCarbon => "Alberta carbon levy",
        }
    }

    /// Drag speed for the numeric input widget. The exchange rate lives around 1.3 so it needs finer steps.
    pub fn drag_speed(self) -> f64 {
        match self {
            Self::ExchangeRateUsCad => 0.01,
            Self::NatGasPrice => 0.1,
            _ => 1.0,
        }
    }
}

impl std::fmt::Display for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn columns_match_dataset_headers_in_table_order() {
        let columns: Vec<&str> = Predictor::iter().map(Predictor::column).collect();
        assert_eq!(
            columns,
            vec![
                "EU_cPrice",
                "AcitivityIndex",
                "Oil_Price",
                "NatGas_Price",
                "ER_USCAD",
                "carbon.credit",
                "carbon.price",
                "alberta.carbon",
            ]
        );
    }

    #[test]
    fn index_follows_iteration_order() {
        for (i, p) in Predictor::iter().enumerate() {
            assert_eq!(p.index(), i);
        }
        assert_eq!(PREDICTOR_COUNT, 8);
    }

    #[test]
    fn from_column_rejects_corrected_spelling() {
        assert_eq!(
            Predictor::from_column("AcitivityIndex").unwrap(),
            Predictor::ActivityIndex
        );
        assert!(matches!(
            Predictor::from_column("ActivityIndex"),
            Err(ForecastError::UnknownPredictor { .. })
        ));
    }
}
