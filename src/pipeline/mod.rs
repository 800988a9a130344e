pub mod stage1_normalize;
pub mod stage2_score;
pub mod stage3_classify;
pub mod stage4_report;

use tracing::{debug, info};

use crate::model::profile::ModelProfile;
use crate::model::risk::{ClinicalInput, Evaluation};
use crate::pipeline::stage1_normalize::run_stage1;
use crate::pipeline::stage2_score::run_stage2;
use crate::pipeline::stage3_classify::run_stage3;

pub fn evaluate(input: &ClinicalInput, profile: &ModelProfile) -> Evaluation {
    let features = run_stage1(input, profile);
    debug!(raw = ?input.values(), normalized = ?features.values, "normalized clinical input");

    let stage2 = run_stage2(&features, profile);
    let result = run_stage3(stage2.probability, &profile.thresholds);
    info!(
        profile = %profile.name,
        z = stage2.linear_predictor,
        probability = result.probability,
        category = result.category.key(),
        "risk evaluated"
    );

    Evaluation {
        input: *input,
        features,
        linear_predictor: stage2.linear_predictor,
        contributions: stage2.contributions,
        result,
    }
}
