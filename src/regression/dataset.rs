use std::io::Read;
use std::path::Path;

use nalgebra::{DMatrix, DVector};

use crate::prelude::*;
use crate::regression::error::{DatasetError, FormatError};
use crate::regression::features::{
    parse_value, FeatureVector, ASSET_NAME, FEATURE_NAMES, LABEL_NAME, N_FEATURES,
};

#[derive(Clone, Debug, PartialEq)]
pub struct LabeledSample {
    pub asset: String,
    pub features: FeatureVector,
    pub grade: f64,
}

/// Non-empty, read-only training set in file order.
#[derive(Clone, Debug)]
pub struct Dataset {
    samples: Vec<LabeledSample>,
}

impl Dataset {
    pub fn from_samples(samples: Vec<LabeledSample>) -> Result<Self, FormatError> {
        if samples.is_empty() {
            return Err(FormatError::Empty);
        }
        Ok(Self { samples })
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let start_instant = Instant::now();
        let content = std::fs::read(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(content.as_slice())?;
        info!(n_samples = dataset.len(), elapsed = ?start_instant.elapsed(), "loaded");
        Ok(dataset)
    }

    /// Reads CSV with a header row.
    ///
    /// Columns are resolved by name once, so their order in the file does not matter
    /// and unknown columns are ignored. The `asset` column is optional.
    pub fn from_reader(reader: impl Read) -> Result<Self, FormatError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers().map_err(FormatError::Csv)?.clone();
        let find_column = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(FormatError::MissingColumn(name))
        };

        let mut feature_columns = [0; N_FEATURES];
        for (column, name) in feature_columns.iter_mut().zip(FEATURE_NAMES) {
            *column = find_column(name)?;
        }
        let label_column = find_column(LABEL_NAME)?;
        let asset_column = find_column(ASSET_NAME).ok();

        let mut samples = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(FormatError::Csv)?;
            let line = record
                .position()
                .map_or(index as u64 + 2, |position| position.line());
            let parse_field = |column: usize, name: &'static str| {
                let raw = record.get(column).unwrap_or_default();
                if raw.is_empty() {
                    return Err(FormatError::MissingValue { line, column: name });
                }
                parse_value(raw).ok_or_else(|| FormatError::NotNumeric {
                    line,
                    column: name,
                    value: raw.to_string(),
                })
            };

            let mut values = [0.0; N_FEATURES];
            for ((value, column), name) in values.iter_mut().zip(feature_columns).zip(FEATURE_NAMES)
            {
                *value = parse_field(column, name)?;
            }
            let asset = asset_column
                .and_then(|column| record.get(column))
                .filter(|asset| !asset.is_empty())
                .map_or_else(|| format!("#{}", index + 1), str::to_string);
            samples.push(LabeledSample {
                asset,
                features: FeatureVector::new(values),
                grade: parse_field(label_column, LABEL_NAME)?,
            });
        }
        debug!(n_samples = samples.len(), has_asset_column = asset_column.is_some());

        Self::from_samples(samples)
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Samples × features, columns in [`FEATURE_NAMES`] order.
    pub fn design_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.samples.len(), N_FEATURES, |row, column| {
            self.samples[row].features.values()[column]
        })
    }

    pub fn labels(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.samples.len(),
            self.samples.iter().map(|sample| sample.grade),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CSV: &str = "\
asset,momentum,grade,risk_score,liquidity,volatility,avg_return,sector
Alpha,4,50,3,5,20,10,tech
,8,80,1,10,10,20,energy
";

    #[test]
    fn from_reader_ok() -> crate::Result {
        let dataset = Dataset::from_reader(CSV.as_bytes())?;
        assert_eq!(dataset.len(), 2);

        let sample = &dataset.samples()[0];
        assert_eq!(sample.asset, "Alpha");
        assert_eq!(sample.features.values(), &[10.0, 20.0, 5.0, 3.0, 4.0]);
        assert_eq!(sample.grade, 50.0);

        assert_eq!(dataset.samples()[1].asset, "#2");
        Ok(())
    }

    #[test]
    fn design_matrix_follows_feature_order_ok() -> crate::Result {
        let dataset = Dataset::from_reader(CSV.as_bytes())?;
        let x = dataset.design_matrix();
        assert_eq!(x.shape(), (2, N_FEATURES));
        assert_eq!(x.row(1).iter().copied().collect::<Vec<_>>(), [20.0, 10.0, 10.0, 1.0, 8.0]);
        assert_eq!(dataset.labels().as_slice(), &[50.0, 80.0]);
        Ok(())
    }

    #[test]
    fn missing_column_error() {
        let csv = "avg_return,volatility,liquidity,momentum,grade\n1,2,3,4,5\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(FormatError::MissingColumn("risk_score")),
        ));
    }

    #[test]
    fn missing_label_column_error() {
        let csv = "avg_return,volatility,liquidity,risk_score,momentum\n1,2,3,4,5\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(FormatError::MissingColumn("grade")),
        ));
    }

    #[test]
    fn non_numeric_value_error() {
        let csv = "avg_return,volatility,liquidity,risk_score,momentum,grade\n\
                   1,2,3,4,5,6\n\
                   1,2,lots,4,5,6\n";
        match Dataset::from_reader(csv.as_bytes()) {
            Err(FormatError::NotNumeric { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "liquidity");
                assert_eq!(value, "lots");
            }
            result => panic!("unexpected result: {:?}", result),
        }
    }

    #[test]
    fn missing_value_error() {
        let csv = "avg_return,volatility,liquidity,risk_score,momentum,grade\n1,2,3,4,5,\n";
        assert!(matches!(
            Dataset::from_reader(csv.as_bytes()),
            Err(FormatError::MissingValue { line: 2, column: "grade" }),
        ));
    }

    #[test]
    fn short_row_error() {
        let csv = "avg_return,volatility,liquidity,risk_score,momentum,grade\n1,2,3\n";
        assert!(matches!(Dataset::from_reader(csv.as_bytes()), Err(FormatError::Csv(_))));
    }

    #[test]
    fn header_only_error() {
        let csv = "avg_return,volatility,liquidity,risk_score,momentum,grade\n";
        assert!(matches!(Dataset::from_reader(csv.as_bytes()), Err(FormatError::Empty)));
    }

    #[test]
    fn load_ok() -> crate::Result {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(CSV.as_bytes())?;
        let dataset = Dataset::load(file.path())?;
        assert_eq!(dataset.len(), 2);
        Ok(())
    }

    #[test]
    fn load_missing_file_error() -> crate::Result {
        let directory = tempfile::tempdir()?;
        let path = directory.path().join("missing.csv");
        match Dataset::load(&path) {
            Err(DatasetError::Io { path: error_path, .. }) => assert_eq!(error_path, path),
            result => panic!("unexpected result: {:?}", result),
        }
        Ok(())
    }

    #[test]
    fn load_malformed_file_error() -> crate::Result {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"name,grade\nfoo,1\n")?;
        assert!(matches!(
            Dataset::load(file.path()),
            Err(DatasetError::Format(FormatError::MissingColumn("avg_return"))),
        ));
        Ok(())
    }
}
