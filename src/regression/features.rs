use std::collections::HashMap;

use crate::regression::error::ValidationError;

pub const N_FEATURES: usize = 5;

/// Canonical feature order. Dataset columns, model weights and feature vectors all follow it.
pub const FEATURE_NAMES: [&str; N_FEATURES] =
    ["avg_return", "volatility", "liquidity", "risk_score", "momentum"];

/// Label column.
pub const LABEL_NAME: &str = "grade";

/// Optional display name column.
pub const ASSET_NAME: &str = "asset";

/// Feature values in [`FEATURE_NAMES`] order.
///
/// Outside callers build it by name through the `TryFrom` implementations,
/// so the supply order never matters.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FeatureVector([f64; N_FEATURES]);

impl FeatureVector {
    /// Wraps the values which **must** already be in [`FEATURE_NAMES`] order.
    pub const fn new(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }

    /// Looks every feature up by its name and parses it.
    ///
    /// Blank values count as missing.
    pub fn try_from_lookup<'a>(
        mut lookup: impl FnMut(&str) -> Option<&'a str>,
    ) -> Result<Self, ValidationError> {
        let mut values = [0.0; N_FEATURES];
        for (value, feature) in values.iter_mut().zip(FEATURE_NAMES) {
            let raw = lookup(feature)
                .map(str::trim)
                .filter(|raw| !raw.is_empty())
                .ok_or(ValidationError::MissingFeature(feature))?;
            *value = parse_value(raw).ok_or_else(|| ValidationError::NotNumeric {
                feature,
                value: raw.to_string(),
            })?;
        }
        Ok(Self(values))
    }

    pub const fn values(&self) -> &[f64; N_FEATURES] {
        &self.0
    }

    /// Named values in the canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.into_iter().zip(self.0.iter().copied())
    }
}

impl TryFrom<&HashMap<String, String>> for FeatureVector {
    type Error = ValidationError;

    fn try_from(fields: &HashMap<String, String>) -> Result<Self, Self::Error> {
        Self::try_from_lookup(|name| fields.get(name).map(String::as_str))
    }
}

impl TryFrom<&HashMap<String, f64>> for FeatureVector {
    type Error = ValidationError;

    fn try_from(fields: &HashMap<String, f64>) -> Result<Self, Self::Error> {
        let mut values = [0.0; N_FEATURES];
        for (value, feature) in values.iter_mut().zip(FEATURE_NAMES) {
            *value = match fields.get(feature) {
                Some(value) if value.is_finite() => *value,
                Some(value) => {
                    return Err(ValidationError::NotNumeric {
                        feature,
                        value: value.to_string(),
                    });
                }
                None => return Err(ValidationError::MissingFeature(feature)),
            };
        }
        Ok(Self(values))
    }
}

/// Parses a finite floating-point number, ignoring the surrounding whitespace.
pub fn parse_value(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn try_from_reorders_by_name_ok() -> crate::Result {
        let fields = fields(&[
            ("momentum", "8"),
            ("risk_score", "7"),
            ("liquidity", "9"),
            ("volatility", "28"),
            ("avg_return", "14"),
        ]);
        let vector = FeatureVector::try_from(&fields)?;
        assert_eq!(vector.values(), &[14.0, 28.0, 9.0, 7.0, 8.0]);
        assert_eq!(vector.iter().nth(2), Some(("liquidity", 9.0)));
        Ok(())
    }

    #[test]
    fn missing_feature_error() {
        let fields = fields(&[
            ("avg_return", "14"),
            ("volatility", "28"),
            ("liquidity", "9"),
            ("momentum", "8"),
        ]);
        assert_eq!(
            FeatureVector::try_from(&fields),
            Err(ValidationError::MissingFeature("risk_score")),
        );
    }

    #[test]
    fn blank_feature_is_missing() {
        let fields = fields(&[
            ("avg_return", "  "),
            ("volatility", "28"),
            ("liquidity", "9"),
            ("risk_score", "7"),
            ("momentum", "8"),
        ]);
        assert_eq!(
            FeatureVector::try_from(&fields),
            Err(ValidationError::MissingFeature("avg_return")),
        );
    }

    #[test]
    fn non_numeric_feature_error() {
        let fields = fields(&[
            ("avg_return", "14"),
            ("volatility", "high"),
            ("liquidity", "9"),
            ("risk_score", "7"),
            ("momentum", "8"),
        ]);
        assert_eq!(
            FeatureVector::try_from(&fields),
            Err(ValidationError::NotNumeric {
                feature: "volatility",
                value: "high".to_string(),
            }),
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value(" 1.5 "), Some(1.5));

        let numbers: HashMap<String, f64> = FEATURE_NAMES
            .iter()
            .map(|name| (name.to_string(), f64::NAN))
            .collect();
        assert!(matches!(
            FeatureVector::try_from(&numbers),
            Err(ValidationError::NotNumeric { feature: "avg_return", .. }),
        ));
    }
}
