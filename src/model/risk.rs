use serde::Serialize;

use crate::model::features::{Feature, N_FEATURES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    High,
    Medium,
    Low,
}

impl RiskCategory {
    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::High => "High risk",
            RiskCategory::Medium => "Medium risk",
            RiskCategory::Low => "Low risk",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            RiskCategory::High => "high",
            RiskCategory::Medium => "medium",
            RiskCategory::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskResult {
    pub probability: f64,
    pub category: RiskCategory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClinicalInput {
    values: [f64; N_FEATURES],
}

impl ClinicalInput {
    /// Caller guarantees every value is finite; see `input::validate_values`.
    pub(crate) fn from_finite(values: [f64; N_FEATURES]) -> Self {
        Self { values }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn values(&self) -> &[f64; N_FEATURES] {
        &self.values
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFeatures {
    pub values: [f64; N_FEATURES],
}

impl NormalizedFeatures {
    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub feature: Feature,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub input: ClinicalInput,
    pub features: NormalizedFeatures,
    pub linear_predictor: f64,
    pub contributions: Vec<Contribution>,
    pub result: RiskResult,
}

impl Evaluation {
    pub fn drivers(&self) -> Vec<Contribution> {
        let mut ranked = self.contributions.clone();
        ranked.sort_by(|a, b| {
            b.value
                .abs()
                .partial_cmp(&a.value.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}
