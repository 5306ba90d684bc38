use serde::Serialize;

/// Root-mean-square error accumulator.
#[derive(Default)]
pub struct Rmse {
    error: f64,
    count: usize,
}

impl Rmse {
    pub fn push(&mut self, residual_error: f64) {
        self.error += residual_error * residual_error;
        self.count += 1;
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        (self.error / self.count.max(1) as f64).sqrt()
    }

    fn sum_of_squares(&self) -> f64 {
        self.error
    }
}

/// Goodness of fit over the training set.
#[derive(Copy, Clone, Debug, Default, Serialize)]
pub struct Diagnostics {
    pub n_samples: usize,
    pub rmse: f64,

    /// Coefficient of determination, undefined when all the labels are equal.
    pub r_squared: Option<f64>,
}

impl Diagnostics {
    /// Takes `(prediction, label)` pairs.
    pub fn evaluate(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let pairs: Vec<(f64, f64)> = pairs.into_iter().collect();
        let mean_label =
            pairs.iter().map(|(_, label)| label).sum::<f64>() / pairs.len().max(1) as f64;

        let mut residuals = Rmse::default();
        let mut deviations = Rmse::default();
        for (prediction, label) in &pairs {
            residuals.push(label - prediction);
            deviations.push(label - mean_label);
        }

        let total = deviations.sum_of_squares();
        let r_squared = (total > f64::EPSILON).then(|| 1.0 - residuals.sum_of_squares() / total);
        Self {
            n_samples: pairs.len(),
            rmse: residuals.average(),
            r_squared,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rmse_ok() {
        let mut rmse = Rmse::default();
        rmse.push(3.0);
        rmse.push(-4.0);
        assert_abs_diff_eq!(rmse.average(), 12.5_f64.sqrt());
    }

    #[test]
    fn rmse_empty_is_zero() {
        assert_eq!(Rmse::default().average(), 0.0);
    }

    #[test]
    fn perfect_fit_ok() {
        let diagnostics = Diagnostics::evaluate([(1.0, 1.0), (2.0, 2.0), (4.0, 4.0)]);
        assert_eq!(diagnostics.n_samples, 3);
        assert_abs_diff_eq!(diagnostics.rmse, 0.0);
        assert_abs_diff_eq!(diagnostics.r_squared.unwrap(), 1.0);
    }

    #[test]
    fn mean_predictor_has_zero_r_squared() {
        let diagnostics = Diagnostics::evaluate([(2.0, 1.0), (2.0, 3.0)]);
        assert_abs_diff_eq!(diagnostics.rmse, 1.0);
        assert_abs_diff_eq!(diagnostics.r_squared.unwrap(), 0.0);
    }

    #[test]
    fn constant_labels_have_no_r_squared() {
        let diagnostics = Diagnostics::evaluate([(1.0, 5.0), (5.0, 5.0)]);
        assert!(diagnostics.r_squared.is_none());
    }
}
