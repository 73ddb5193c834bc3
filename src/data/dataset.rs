use {
    crate::{
        config::{ACTUAL_PRICE_COLUMN, DF},
        domain::{InputVector, Observation, PREDICTOR_COUNT, Predictor},
        error::{ForecastError, Result},
    },
    csv::StringRecord,
    std::path::{Path, PathBuf},
    strum::IntoEnumIterator,
};

/// Monthly observations in file order. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalDataset {
    source: Option<PathBuf>,
    columns: Vec<String>,
    rows: Vec<Observation>,
}

impl HistoricalDataset {
    /// Reads a CSV with a header row. The eight predictor columns and `MonthlyPrice`
    /// are required; any other columns are kept in `columns()` but otherwise ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        crate::trace_time!("Load dataset", 5000, {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_path(path)
                .map_err(|source| ForecastError::DatasetOpen {
                    path: path.to_path_buf(),
                    source,
                })?;

            let headers = reader
                .headers()
                .map_err(|source| ForecastError::DatasetRead {
                    path: path.to_path_buf(),
                    source,
                })?
                .clone();

            let layout = ColumnLayout::resolve(path, &headers)?;

            let mut rows = Vec::new();
            for (index, record) in reader.records().enumerate() {
                let record = record.map_err(|source| ForecastError::DatasetRead {
                    path: path.to_path_buf(),
                    source,
                })?;
                rows.push(layout.parse_row(path, index, &record)?);
            }

            if DF.log_dataset {
                log::info!(
                    "Loaded {} observations ({} columns) from {}",
                    rows.len(),
                    headers.len(),
                    path.display()
                );
            }

            Ok(Self {
                source: Some(path.to_path_buf()),
                columns: headers.iter().map(str::to_string).collect(),
                rows,
            })
        })
    }

    /// In-memory table, indices are reassigned from position.
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| Observation { index, ..row })
            .collect();

        let mut columns: Vec<String> = Predictor::iter().map(|p| p.column().to_string()).collect();
        columns.push(ACTUAL_PRICE_COLUMN.to_string());

        Self {
            source: None,
            columns,
            rows,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Header names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn actual_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.monthly_price)
    }
}

/// Where each required column sits in a record.
struct ColumnLayout {
    predictors: [usize; PREDICTOR_COUNT],
    actual: usize,
}

impl ColumnLayout {
    fn resolve(path: &Path, headers: &StringRecord) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| ForecastError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };

        let mut predictors = [0; PREDICTOR_COUNT];
        for predictor in Predictor::iter() {
            predictors[predictor.index()] = find(predictor.column())?;
        }

        Ok(Self {
            predictors,
            actual: find(ACTUAL_PRICE_COLUMN)?,
        })
    }

    fn parse_row(&self, path: &Path, index: usize, record: &StringRecord) -> Result<Observation> {
        let cell = |pos: usize, column: &'static str| -> Result<f64> {
            let raw = record.get(pos).unwrap_or("");
            raw.parse::<f64>().map_err(|_| ForecastError::BadCell {
                path: path.to_path_buf(),
                // 1-based data row, header excluded
                row: index + 1,
                column,
                value: raw.to_string(),
            })
        };

        let mut values = [0.0; PREDICTOR_COUNT];
        for predictor in Predictor::iter() {
            values[predictor.index()] = cell(self.predictors[predictor.index()], predictor.column())?;
        }

        Ok(Observation {
            index,
            inputs: InputVector::new(values),
            monthly_price: cell(self.actual, ACTUAL_PRICE_COLUMN)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Date,EU_cPrice,AcitivityIndex,Oil_Price,NatGas_Price,ER_USCAD,carbon.credit,carbon.price,alberta.carbon,MonthlyPrice";

    fn write_csv(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", body).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_rows_in_file_order() {
        let file = write_csv(&format!(
            "{HEADER}\n2023-01,80,290,78,3.1,1.35,25,28,18,40.5\n2023-02,82,291,79,3.2,1.34,26,29,19,41.25\n"
        ));

        let ds = HistoricalDataset::load(file.path()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.columns()[0], "Date");
        assert_eq!(ds.columns().len(), 10);
        assert_eq!(ds.rows()[0].index, 0);
        assert_eq!(ds.rows()[1].index, 1);
        assert_eq!(ds.rows()[1].monthly_price, 41.25);
        assert_eq!(ds.rows()[1].inputs[Predictor::ExchangeRateUsCad], 1.34);
        assert_eq!(ds.source(), Some(file.path()));
    }

    #[test]
    fn column_order_in_file_does_not_matter() {
        let file = write_csv(
            "MonthlyPrice,alberta.carbon,carbon.price,carbon.credit,ER_USCAD,NatGas_Price,Oil_Price,AcitivityIndex,EU_cPrice\n\
             12,8,7,6,5,4,3,2,1\n",
        );
        let ds = HistoricalDataset::load(file.path()).unwrap();
        assert_eq!(
            ds.rows()[0].inputs.as_array(),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]
        );
        assert_eq!(ds.rows()[0].monthly_price, 12.0);
    }

    #[test]
    fn header_only_file_is_an_empty_table() {
        let file = write_csv(&format!("{HEADER}\n"));
        let ds = HistoricalDataset::load(file.path()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = HistoricalDataset::load("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, ForecastError::DatasetOpen { .. }));
    }

    #[test]
    fn missing_price_column_is_named() {
        let file = write_csv(
            "EU_cPrice,AcitivityIndex,Oil_Price,NatGas_Price,ER_USCAD,carbon.credit,carbon.price,alberta.carbon\n1,2,3,4,5,6,7,8\n",
        );
        match HistoricalDataset::load(file.path()) {
            Err(ForecastError::MissingColumn { column, .. }) => assert_eq!(column, "MonthlyPrice"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_cell_reports_row_and_column() {
        let file = write_csv(&format!(
            "{HEADER}\n2023-01,80,290,78,3.1,1.35,25,28,18,40.5\n2023-02,82,n/a,79,3.2,1.34,26,29,19,41\n"
        ));
        match HistoricalDataset::load(file.path()) {
            Err(ForecastError::BadCell {
                row, column, value, ..
            }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "AcitivityIndex");
                assert_eq!(value, "n/a");
            }
            other => panic!("expected BadCell, got {:?}", other),
        }
    }

    #[test]
    fn from_rows_reindexes() {
        let row = Observation {
            index: 42,
            inputs: crate::config::BASE_DEFAULTS,
            monthly_price: 1.0,
        };
        let ds = HistoricalDataset::from_rows(vec![row, row]);
        assert_eq!(ds.rows()[0].index, 0);
        assert_eq!(ds.rows()[1].index, 1);
        assert_eq!(ds.columns().last().map(String::as_str), Some("MonthlyPrice"));
    }
}
