pub mod json;
pub mod text;

use clap::ValueEnum;
use serde::Serialize;

use crate::model::profile::EvalProfile;
use crate::pipeline::stage5_sweep::{PairOutcome, SkippedMethod, SweepOutput};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodSummary {
    pub method: String,
    pub mean: f64,
    pub scores: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub tool: String,
    pub version: String,
    pub ground_truth: String,
    pub metric: String,
    pub alpha: f64,
    pub image_count: usize,
    pub methods: Vec<MethodSummary>,
    pub skipped: Vec<SkippedMethod>,
    pub pairs: Vec<PairOutcome>,
}

impl SweepReport {
    pub fn new(output: &SweepOutput, profile: &EvalProfile) -> Self {
        let methods = output
            .series
            .iter()
            .map(|s| MethodSummary {
                method: s.method.clone(),
                mean: s.mean().unwrap_or(f64::NAN),
                scores: s.scores.clone(),
            })
            .collect();
        Self {
            tool: "kira-segeval".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ground_truth: output.ground_truth.clone(),
            metric: profile.metric.label().to_string(),
            alpha: profile.alpha,
            image_count: profile.image_count,
            methods,
            skipped: output.skipped.clone(),
            pairs: output.pairs.clone(),
        }
    }
}

pub fn format_pct(v: f64) -> String {
    if v.is_nan() {
        return "n/a".to_string();
    }
    format!("{:.2}%", v * 100.0)
}

pub fn format_p(v: f64) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
