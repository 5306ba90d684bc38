//! Ordinary least squares through the normal equation.
//!
//! The coefficients are `pinv(XᵀX) · Xᵀ · y`, where `X` is the design matrix with a leading
//! column of ones. The pseudo-inverse comes from an SVD, so rank-deficient and under-determined
//! datasets still produce the least-norm solution instead of failing.

use nalgebra::DMatrix;

use crate::math::dot;
use crate::prelude::*;
use crate::regression::dataset::Dataset;
use crate::regression::error::FitError;
use crate::regression::features::{FeatureVector, FEATURE_NAMES, N_FEATURES};
use crate::regression::metrics::Diagnostics;

/// Singular values below this fraction of the largest one are treated as zeros.
const RELATIVE_TOLERANCE: f64 = 1e-12;

/// Bounds the SVD, which never converges on a matrix with non-finite entries.
const MAX_ITERATIONS: usize = 1000;

/// Fitted once at startup, read-only afterwards.
#[derive(Clone, Debug)]
pub struct Model {
    pub bias: f64,

    /// One per feature, in [`FEATURE_NAMES`] order.
    pub weights: [f64; N_FEATURES],

    pub diagnostics: Diagnostics,
}

impl Model {
    #[instrument(skip_all, fields(n_samples = dataset.len()))]
    pub fn fit(dataset: &Dataset) -> Result<Self, FitError> {
        let start_instant = Instant::now();

        let x = dataset.design_matrix().insert_column(0, 1.0);
        let x_transposed = x.transpose();
        let gram = &x_transposed * &x;
        let moments = &x_transposed * dataset.labels();
        if !gram.iter().chain(moments.iter()).all(|value| value.is_finite()) {
            return Err(FitError::Overflow);
        }
        let coefficients = pseudo_inverse(gram)? * moments;
        if !coefficients.iter().all(|coefficient| coefficient.is_finite()) {
            return Err(FitError::NotFinite);
        }

        let mut weights = [0.0; N_FEATURES];
        weights.copy_from_slice(&coefficients.as_slice()[1..]);
        let mut model = Self {
            bias: coefficients[0],
            weights,
            diagnostics: Diagnostics::default(),
        };
        let diagnostics = Diagnostics::evaluate(
            dataset
                .samples()
                .iter()
                .map(|sample| (model.predict(&sample.features), sample.grade)),
        );
        model.diagnostics = diagnostics;

        info!(
            bias = model.bias,
            weights = ?model.weights,
            rmse = model.diagnostics.rmse,
            r_squared = ?model.diagnostics.r_squared,
            elapsed = ?start_instant.elapsed(),
            "fitted",
        );
        Ok(model)
    }

    /// Bias plus the weighted sum of the features. Not rounded.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.bias + dot(&self.weights, features.values())
    }

    /// Named weights in the canonical order.
    pub fn named_weights(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.into_iter().zip(self.weights.iter().copied())
    }
}

fn pseudo_inverse(matrix: DMatrix<f64>) -> Result<DMatrix<f64>, FitError> {
    let svd = matrix
        .try_svd(true, true, f64::EPSILON, MAX_ITERATIONS)
        .ok_or(FitError::NotConverged)?;
    let tolerance = RELATIVE_TOLERANCE * svd.singular_values.max().max(0.0);
    Ok(svd
        .pseudo_inverse(tolerance)
        .expect("the tolerance is always non-negative"))
}
