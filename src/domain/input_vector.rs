use {
    crate::{
        domain::{PREDICTOR_COUNT, Predictor},
        error::{ForecastError, Result},
    },
    serde::{Serialize, Serializer},
    std::ops::{Index, IndexMut},
    strum::IntoEnumIterator,
};

/// A complete predictor -> value mapping.
/// Stored densely in coefficient-table order, so a missing predictor cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputVector {
    values: [f64; PREDICTOR_COUNT],
}

impl InputVector {
    /// Values must be given in `Predictor` order.
    pub const fn new(values: [f64; PREDICTOR_COUNT]) -> Self {
        Self { values }
    }

    #[inline]
    pub fn get(&self, predictor: Predictor) -> f64 {
        self.values[predictor.index()]
    }

    #[inline]
    pub fn set(&mut self, predictor: Predictor, value: f64) {
        self.values[predictor.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Predictor, f64)> + '_ {
        Predictor::iter().map(|p| (p, self.get(p)))
    }

    pub fn as_array(&self) -> &[f64; PREDICTOR_COUNT] {
        &self.values
    }

    /// Builds a vector from (column name, value) pairs. Every predictor must appear;
    /// later duplicates overwrite earlier ones.
    pub fn from_named<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut values = [None; PREDICTOR_COUNT];
        for (name, value) in pairs {
            let predictor = Predictor::from_column(name)?;
            values[predictor.index()] = Some(value);
        }

        let mut out = [0.0; PREDICTOR_COUNT];
        for predictor in Predictor::iter() {
            out[predictor.index()] =
                values[predictor.index()].ok_or(ForecastError::MissingPredictor {
                    column: predictor.column(),
                })?;
        }
        Ok(Self::new(out))
    }
}

impl Index<Predictor> for InputVector {
    type Output = f64;

    fn index(&self, predictor: Predictor) -> &f64 {
        &self.values[predictor.index()]
    }
}

impl IndexMut<Predictor> for InputVector {
    fn index_mut(&mut self, predictor: Predictor) -> &mut f64 {
        &mut self.values[predictor.index()]
    }
}

// Serialized as a column-name keyed map so JSON output reads like a dataset row.
impl Serialize for InputVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(p, v)| (p.column(), v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_row() -> Vec<(&'static str, f64)> {
        vec![
            ("EU_cPrice", 1.0),
            ("AcitivityIndex", 2.0),
            ("Oil_Price", 3.0),
            ("NatGas_Price", 4.0),
            ("ER_USCAD", 5.0),
            ("carbon.credit", 6.0),
            ("carbon.price", 7.0),
            ("alberta.carbon", 8.0),
        ]
    }

    #[test]
    fn from_named_accepts_any_order() {
        let mut row = named_row();
        row.reverse();
        let v = InputVector::from_named(row).unwrap();
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn from_named_reports_missing_predictor() {
        let row: Vec<_> = named_row()
            .into_iter()
            .filter(|(name, _)| *name != "ER_USCAD")
            .collect();
        match InputVector::from_named(row) {
            Err(ForecastError::MissingPredictor { column }) => assert_eq!(column, "ER_USCAD"),
            other => panic!("expected MissingPredictor, got {:?}", other),
        }
    }

    #[test]
    fn set_touches_a_single_field() {
        let mut v = InputVector::from_named(named_row()).unwrap();
        v.set(Predictor::OilPrice, 150.0);
        assert_eq!(v[Predictor::OilPrice], 150.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, 150.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn serializes_with_column_names() {
        let v = InputVector::from_named(named_row()).unwrap();
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["carbon.price"], 7.0);
        assert_eq!(json["AcitivityIndex"], 2.0);
    }
}
