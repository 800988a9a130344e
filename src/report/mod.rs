pub mod json;
pub mod text;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::features::feature_order;
use crate::model::profile::{ModelProfile, RiskThresholds};
use crate::model::risk::{Contribution, Evaluation};

pub const TOOL_NAME: &str = "kira-metarisk";

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelMeta {
    pub name: String,
    pub bias: f64,
    pub thresholds: RiskThresholds,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: &'static str,
    pub tool_meta: ToolMeta,
    pub model: ModelMeta,
    pub input: BTreeMap<&'static str, f64>,
    pub normalized: BTreeMap<&'static str, f64>,
    pub linear_predictor: f64,
    pub probability: f64,
    pub category: &'static str,
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone)]
pub struct FeatureRow {
    pub label: &'static str,
    pub raw: f64,
    pub normalized: f64,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub category_label: &'static str,
    pub probability: f64,
    pub linear_predictor: f64,
    pub rows: Vec<FeatureRow>,
    pub drivers: Vec<Contribution>,
    pub model_name: String,
    pub bias: f64,
    pub thresholds: RiskThresholds,
}

pub fn build_summary(eval: &Evaluation, profile: &ModelProfile) -> SummaryData {
    let mut input = BTreeMap::new();
    let mut normalized = BTreeMap::new();
    for &feature in feature_order() {
        input.insert(feature.key(), eval.input.get(feature));
        normalized.insert(feature.key(), eval.features.get(feature));
    }
    SummaryData {
        tool: TOOL_NAME,
        tool_meta: ToolMeta {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        model: ModelMeta {
            name: profile.name.clone(),
            bias: profile.bias,
            thresholds: profile.thresholds,
        },
        input,
        normalized,
        linear_predictor: eval.linear_predictor,
        probability: eval.result.probability,
        category: eval.result.category.key(),
        contributions: eval.contributions.clone(),
    }
}

pub fn build_report_context(eval: &Evaluation, profile: &ModelProfile) -> ReportContext {
    let rows = feature_order()
        .iter()
        .map(|&feature| FeatureRow {
            label: feature.label(),
            raw: eval.input.get(feature),
            normalized: eval.features.get(feature),
        })
        .collect();
    ReportContext {
        category_label: eval.result.category.label(),
        probability: eval.result.probability,
        linear_predictor: eval.linear_predictor,
        rows,
        drivers: eval.drivers(),
        model_name: profile.name.clone(),
        bias: profile.bias,
        thresholds: profile.thresholds,
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_signed_6(v: f64) -> String {
    format!("{:+.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
