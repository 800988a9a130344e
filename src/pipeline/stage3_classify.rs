use crate::model::profile::RiskThresholds;
use crate::model::risk::{RiskCategory, RiskResult};

pub fn classify(probability: f64, thresholds: &RiskThresholds) -> RiskCategory {
    if probability >= thresholds.high {
        RiskCategory::High
    } else if probability >= thresholds.medium {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

pub fn run_stage3(probability: f64, thresholds: &RiskThresholds) -> RiskResult {
    RiskResult {
        probability,
        category: classify(probability, thresholds),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
