use super::*;
use crate::input::validate_values;
use crate::model::features::{Feature, N_FEATURES};
use crate::pipeline::stage1_normalize::run_stage1;

const DEFAULTS: [f64; N_FEATURES] = [55.0, 2.0, 2.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];

fn probability(values: [f64; N_FEATURES]) -> f64 {
    let profile = ModelProfile::default_v1();
    let features = run_stage1(&validate_values(values).unwrap(), &profile);
    run_stage2(&features, &profile).probability
}

#[test]
fn test_logistic() {
    assert_eq!(logistic(0.0), 0.5);
    assert!(logistic(40.0) > 0.999_999);
    assert!(logistic(-40.0) < 1e-6);
    assert!((logistic(1.0) + logistic(-1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_default_score() {
    let profile = ModelProfile::default_v1();
    let features = run_stage1(&validate_values(DEFAULTS).unwrap(), &profile);
    let out = run_stage2(&features, &profile);
    assert!((out.linear_predictor - (-0.419_666_666_666_666_6)).abs() < 1e-9);
    assert!((out.probability - 0.396_596_516_625_032_8).abs() < 1e-9);
    assert_eq!(out.contributions.len(), N_FEATURES);
    let sum: f64 = out.contributions.iter().map(|c| c.value).sum();
    assert!((profile.bias + sum - out.linear_predictor).abs() < 1e-12);
}

#[test]
fn test_monotone_in_each_feature() {
    let profile = ModelProfile::default_v1();
    let grids: [(Feature, &[f64]); 10] = [
        (Feature::Age, &[0.0, 18.0, 40.0, 70.0, 90.0, 120.0]),
        (Feature::TumorCm, &[0.0, 0.1, 1.0, 5.0, 10.0, 15.0]),
        (Feature::Grade, &[0.0, 1.0, 2.0, 3.0, 4.0]),
        (Feature::LymphNodes, &[0.0, 1.0, 5.0, 20.0, 30.0]),
        (Feature::Er, &[-1.0, 0.0, 0.5, 1.0, 2.0]),
        (Feature::Pr, &[-1.0, 0.0, 0.5, 1.0, 2.0]),
        (Feature::Her2, &[-1.0, 0.0, 0.5, 1.0, 2.0]),
        (Feature::Vascular, &[-1.0, 0.0, 0.5, 1.0, 2.0]),
        (Feature::Invasion, &[-1.0, 0.0, 0.5, 1.0, 2.0]),
        (Feature::Comorbidity, &[-1.0, 0.0, 0.5, 1.0, 2.0]),
    ];
    for (feature, grid) in grids {
        let positive = profile.weight(feature) > 0.0;
        let mut prev: Option<f64> = None;
        for &x in grid {
            let mut values = DEFAULTS;
            values[feature.index()] = x;
            let p = probability(values);
            if let Some(prev) = prev {
                if positive {
                    assert!(p >= prev, "{feature:?} decreased at {x}");
                } else {
                    assert!(p <= prev, "{feature:?} increased at {x}");
                }
            }
            prev = Some(p);
        }
    }
}

#[test]
fn test_contributions_follow_feature_order() {
    let profile = ModelProfile::default_v1();
    let features = run_stage1(&validate_values(DEFAULTS).unwrap(), &profile);
    let out = run_stage2(&features, &profile);
    let order: Vec<Feature> = out.contributions.iter().map(|c| c.feature).collect();
    assert_eq!(order, feature_order().to_vec());
    let er = out.contributions[Feature::Er.index()].value;
    assert!((er - (-0.30)).abs() < 1e-12);
}
