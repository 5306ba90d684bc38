//! Grade regression: the dataset, the least-squares fit and the predictor.

pub mod dataset;
pub mod error;
pub mod features;
pub mod metrics;
pub mod model;

pub use self::dataset::Dataset;
pub use self::error::ValidationError;
pub use self::features::{FeatureVector, FEATURE_NAMES, N_FEATURES};
pub use self::model::Model;
