use crate::model::features::feature_order;
use crate::model::profile::ModelProfile;
use crate::model::risk::{Contribution, NormalizedFeatures};

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub linear_predictor: f64,
    pub probability: f64,
    pub contributions: Vec<Contribution>,
}

pub fn run_stage2(features: &NormalizedFeatures, profile: &ModelProfile) -> Stage2Output {
    let mut contributions = Vec::with_capacity(feature_order().len());
    let mut z = profile.bias;
    for &feature in feature_order() {
        let value = features.get(feature) * profile.weight(feature);
        z += value;
        contributions.push(Contribution { feature, value });
    }
    Stage2Output {
        linear_predictor: z,
        probability: logistic(z),
        contributions,
    }
}

#[inline]
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
