use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Startup-time dataset failure. Either variant means there is no model to serve.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read the dataset `{}`", path.display())]
    Io {
        path: PathBuf,

        #[source]
        source: io::Error,
    },

    #[error("malformed dataset")]
    Format(#[from] FormatError),
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("required column `{0}` is missing from the header")]
    MissingColumn(&'static str),

    #[error("line {line}: `{column}` is empty")]
    MissingValue { line: u64, column: &'static str },

    #[error("line {line}: `{column}` is not a finite number: {value:?}")]
    NotNumeric {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("invalid CSV")]
    Csv(#[source] csv::Error),

    #[error("the dataset contains no samples")]
    Empty,
}

/// Per-request failure to assemble a feature vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{0}` is required")]
    MissingFeature(&'static str),

    #[error("`{feature}` must be a number, got {value:?}")]
    NotNumeric { feature: &'static str, value: String },
}

/// The least-squares system could not be solved in floating point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    #[error("the normal equation overflows, the dataset values are too large")]
    Overflow,

    #[error("the singular value decomposition did not converge")]
    NotConverged,

    #[error("the fitted coefficients are not finite")]
    NotFinite,
}
