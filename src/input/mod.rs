use thiserror::Error;

pub mod form;

use crate::model::features::{Feature, N_FEATURES, feature_order};
use crate::model::risk::ClinicalInput;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field}: expected a number, got {value:?}")]
    NonNumeric { field: &'static str, value: String },
    #[error("{field}: value must be finite")]
    NonFinite { field: &'static str },
}

pub fn validate_values(values: [f64; N_FEATURES]) -> Result<ClinicalInput, InputError> {
    for &feature in feature_order() {
        if !values[feature.index()].is_finite() {
            return Err(InputError::NonFinite {
                field: feature.label(),
            });
        }
    }
    Ok(ClinicalInput::from_finite(values))
}

pub fn parse_field(feature: Feature, text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NonNumeric {
            field: feature.label(),
            value: trimmed.to_string(),
        })?;
    if !value.is_finite() {
        return Err(InputError::NonFinite {
            field: feature.label(),
        });
    }
    Ok(value)
}

pub fn parse_fields<S: AsRef<str>>(texts: &[S; N_FEATURES]) -> Result<ClinicalInput, InputError> {
    let mut values = [0.0; N_FEATURES];
    for &feature in feature_order() {
        values[feature.index()] = parse_field(feature, texts[feature.index()].as_ref())?;
    }
    validate_values(values)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
