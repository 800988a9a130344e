use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::features::{Feature, FeatureScale, N_FEATURES, feature_order};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: 0.75,
            medium: 0.50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelProfile {
    pub name: String,
    pub scales: [FeatureScale; N_FEATURES],
    pub weights: [f64; N_FEATURES],
    pub bias: f64,
    pub thresholds: RiskThresholds,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("model file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid model profile: {0}")]
    Invalid(String),
}

impl Default for ModelProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ModelProfile {
    pub fn default_v1() -> Self {
        Self {
            name: "default_v1".to_string(),
            scales: [
                FeatureScale::new(18.0, 90.0, 100.0),
                FeatureScale::new(0.1, 10.0, 10.0),
                FeatureScale::new(1.0, 3.0, 3.0),
                FeatureScale::new(0.0, 20.0, 20.0),
                FeatureScale::new(0.0, 1.0, 1.0),
                FeatureScale::new(0.0, 1.0, 1.0),
                FeatureScale::new(0.0, 1.0, 1.0),
                FeatureScale::new(0.0, 1.0, 1.0),
                FeatureScale::new(0.0, 1.0, 1.0),
                FeatureScale::new(0.0, 1.0, 1.0),
            ],
            weights: [0.02, 0.28, 0.32, 0.45, -0.30, -0.18, 0.22, 0.15, 0.27, 0.10],
            bias: -0.22,
            thresholds: RiskThresholds::default(),
        }
    }

    pub fn scale(&self, feature: Feature) -> &FeatureScale {
        &self.scales[feature.index()]
    }

    pub fn weight(&self, feature: Feature) -> f64 {
        self.weights[feature.index()]
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ProfileError> {
        let profile: ModelProfile = serde_json::from_str(raw)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        for &feature in feature_order() {
            let s = self.scale(feature);
            if !(s.min.is_finite() && s.max.is_finite() && s.divisor.is_finite()) {
                return Err(ProfileError::Invalid(format!(
                    "scale for {} is not finite",
                    feature.key()
                )));
            }
            if s.min > s.max {
                return Err(ProfileError::Invalid(format!(
                    "scale for {}: min {} exceeds max {}",
                    feature.key(),
                    s.min,
                    s.max
                )));
            }
            if s.divisor <= 0.0 {
                return Err(ProfileError::Invalid(format!(
                    "scale for {}: divisor must be positive",
                    feature.key()
                )));
            }
            if s.min < 0.0 || s.max > s.divisor {
                return Err(ProfileError::Invalid(format!(
                    "scale for {} maps outside [0, 1]",
                    feature.key()
                )));
            }
            if !self.weight(feature).is_finite() {
                return Err(ProfileError::Invalid(format!(
                    "weight for {} is not finite",
                    feature.key()
                )));
            }
        }
        if !self.bias.is_finite() {
            return Err(ProfileError::Invalid("bias is not finite".to_string()));
        }
        let t = self.thresholds;
        if !(0.0..=1.0).contains(&t.medium) || !(0.0..=1.0).contains(&t.high) {
            return Err(ProfileError::Invalid(
                "thresholds must lie in [0, 1]".to_string(),
            ));
        }
        if t.medium > t.high {
            return Err(ProfileError::Invalid(format!(
                "medium threshold {} exceeds high threshold {}",
                t.medium, t.high
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
