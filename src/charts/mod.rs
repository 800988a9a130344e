use std::f64::consts::TAU;

use crate::model::features::{Feature, feature_order};
use crate::model::risk::{Evaluation, RiskCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartColor {
    Red,
    Orange,
    Green,
    SkyBlue,
}

impl ChartColor {
    pub fn for_category(category: RiskCategory) -> Self {
        match category {
            RiskCategory::High => ChartColor::Red,
            RiskCategory::Medium => ChartColor::Orange,
            RiskCategory::Low => ChartColor::Green,
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            ChartColor::Red => [255, 0, 0],
            ChartColor::Orange => [255, 165, 0],
            ChartColor::Green => [0, 128, 0],
            ChartColor::SkyBlue => [135, 206, 235],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityBar {
    pub label: &'static str,
    pub value: f64,
    pub color: ChartColor,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBars {
    pub title: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<(&'static str, f64)>,
    pub color: ChartColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSpoke {
    pub label: &'static str,
    pub angle: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiomarkerRadar {
    pub title: &'static str,
    pub spokes: Vec<RadarSpoke>,
    /// Cartesian vertices; the first vertex is repeated at the end.
    pub outline: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub probability: ProbabilityBar,
    pub profile: ProfileBars,
    pub radar: BiomarkerRadar,
}

pub fn build_charts(eval: &Evaluation) -> ChartSet {
    ChartSet {
        probability: probability_bar(eval),
        profile: profile_bars(eval),
        radar: biomarker_radar(eval),
    }
}

pub fn probability_bar(eval: &Evaluation) -> ProbabilityBar {
    let category = eval.result.category;
    ProbabilityBar {
        label: "Risk",
        value: eval.result.probability,
        color: ChartColor::for_category(category),
        title: category.label(),
    }
}

pub fn profile_bars(eval: &Evaluation) -> ProfileBars {
    let bars = feature_order()
        .iter()
        .filter(|f| !f.is_binary())
        .map(|&f| (f.short_label(), eval.features.get(f)))
        .collect();
    ProfileBars {
        title: "Clinical profile",
        y_label: "Normalized",
        bars,
        color: ChartColor::SkyBlue,
    }
}

pub fn biomarker_radar(eval: &Evaluation) -> BiomarkerRadar {
    let markers: Vec<Feature> = feature_order()
        .iter()
        .copied()
        .filter(|f| f.is_binary())
        .collect();
    let n = markers.len() as f64;
    let spokes: Vec<RadarSpoke> = markers
        .iter()
        .enumerate()
        .map(|(i, &f)| RadarSpoke {
            label: f.short_label(),
            angle: TAU * i as f64 / n,
            value: eval.features.get(f),
        })
        .collect();

    let mut outline: Vec<[f64; 2]> = spokes
        .iter()
        .map(|s| polar_to_xy(s.value, s.angle))
        .collect();
    if let Some(&first) = outline.first() {
        outline.push(first);
    }

    BiomarkerRadar {
        title: "Biomarkers",
        spokes,
        outline,
    }
}

pub fn polar_to_xy(radius: f64, angle: f64) -> [f64; 2] {
    [radius * angle.cos(), radius * angle.sin()]
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/tests.rs"]
mod tests;
