use crate::model::features::{N_FEATURES, feature_order};
use crate::model::profile::ModelProfile;
use crate::model::risk::{ClinicalInput, NormalizedFeatures};

pub fn run_stage1(input: &ClinicalInput, profile: &ModelProfile) -> NormalizedFeatures {
    let mut values = [0.0; N_FEATURES];
    for &feature in feature_order() {
        values[feature.index()] = profile.scale(feature).apply(input.get(feature));
    }
    NormalizedFeatures { values }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
