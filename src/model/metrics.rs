use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    pub sensitivity: f64,
    pub specificity: f64,
    pub precision: f64,
    pub f1_score: f64,
}

/// What a ratio with a zero denominator evaluates to.
///
/// Precision is not governed by this: no predicted positives is always a
/// precision of 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivisionPolicy {
    /// Surface `EvalError::UndefinedMetric`.
    #[default]
    Fail,
    /// Treat the ratio as 1.
    Perfect,
    /// Evaluate to NaN and let it propagate.
    Nan,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMetric {
    Sensitivity,
    Specificity,
    Precision,
    #[default]
    F1,
}

impl ScoreMetric {
    pub fn select(&self, metrics: &PerformanceMetrics) -> f64 {
        match self {
            ScoreMetric::Sensitivity => metrics.sensitivity,
            ScoreMetric::Specificity => metrics.specificity,
            ScoreMetric::Precision => metrics.precision,
            ScoreMetric::F1 => metrics.f1_score,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreMetric::Sensitivity => "sensitivity",
            ScoreMetric::Specificity => "specificity",
            ScoreMetric::Precision => "precision",
            ScoreMetric::F1 => "f1_score",
        }
    }
}
