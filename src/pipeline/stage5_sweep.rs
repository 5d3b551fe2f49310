use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{EvalError, SeriesError, SweepError};
use crate::input::{MaskSource, load_series};
use crate::model::confusion::ConfusionMatrix;
use crate::model::metrics::{PerformanceMetrics, ZeroDivisionPolicy};
use crate::model::profile::{EvalProfile, validate_image_index};
use crate::model::series::ScoreSeries;
use crate::model::verdict::TestResult;
use crate::pipeline::stage1_confusion::compute_confusion;
use crate::pipeline::stage2_metrics::metrics_from_confusion;
use crate::pipeline::stage3_scores::MethodComparator;
use crate::pipeline::stage4_test::compare_methods_at;

#[derive(Debug, Clone)]
pub struct SweepInputs<'a> {
    pub gt_method: &'a str,
    pub methods: &'a [String],
    pub profile: &'a EvalProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairStatus {
    Tested,
    NoDifference,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairOutcome {
    pub first: String,
    pub second: String,
    pub first_mean: f64,
    pub second_mean: f64,
    pub status: PairStatus,
    pub result: Option<TestResult>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedMethod {
    pub method: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct SweepOutput {
    pub ground_truth: String,
    pub series: Vec<ScoreSeries>,
    pub skipped: Vec<SkippedMethod>,
    pub pairs: Vec<PairOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageInspection {
    pub ground_truth: String,
    pub method: String,
    pub index: usize,
    pub confusion: ConfusionMatrix,
    pub metrics: PerformanceMetrics,
}

/// Scores every method once against the ground truth, then tests every
/// ordered pair of distinct scored methods.
pub fn run_sweep<S>(source: &S, inputs: &SweepInputs<'_>) -> Result<SweepOutput, SweepError>
where
    S: MaskSource + Sync + ?Sized,
{
    inputs.profile.validate().map_err(SweepError::Invalid)?;
    if inputs.methods.len() < 2 {
        return Err(SweepError::Invalid(
            "at least two methods are required".to_string(),
        ));
    }
    for (i, m) in inputs.methods.iter().enumerate() {
        if inputs.methods[..i].contains(m) {
            return Err(SweepError::Invalid(format!("duplicate method '{m}'")));
        }
    }

    let profile = inputs.profile;
    let gts = load_series(source, inputs.gt_method, profile.image_count)?;
    info!(
        ground_truth = inputs.gt_method,
        n_images = gts.len(),
        "loaded ground truth"
    );

    let comparator = MethodComparator::new(profile.metric, profile.zero_policy);
    let scored = inputs
        .methods
        .par_iter()
        .map(|method| {
            let segs = load_series(source, method, profile.image_count)?;
            let series = comparator.score_method(method, &gts, &segs)?;
            Ok::<ScoreSeries, SweepError>(series)
        })
        .collect::<Vec<_>>();

    let mut series = Vec::with_capacity(scored.len());
    let mut skipped = Vec::new();
    for (method, outcome) in inputs.methods.iter().zip(scored) {
        match outcome {
            Ok(s) => series.push(s),
            Err(e) => {
                warn!(method = %method, error = %e, "skipping method");
                skipped.push(SkippedMethod {
                    method: method.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let mut index_pairs = Vec::new();
    for i in 0..series.len() {
        for j in 0..series.len() {
            if i != j {
                index_pairs.push((i, j));
            }
        }
    }
    let pairs = index_pairs
        .par_iter()
        .map(|&(i, j)| test_pair(&series[i], &series[j], profile.alpha))
        .collect::<Vec<_>>();

    let superior = pairs
        .iter()
        .filter(|p| p.result.is_some_and(|r| r.first_is_superior))
        .count();
    info!(
        n_methods = series.len(),
        n_skipped = skipped.len(),
        n_pairs = pairs.len(),
        n_superior = superior,
        "sweep finished"
    );

    Ok(SweepOutput {
        ground_truth: inputs.gt_method.to_string(),
        series,
        skipped,
        pairs,
    })
}

fn test_pair(first: &ScoreSeries, second: &ScoreSeries, alpha: f64) -> PairOutcome {
    let (status, result, error) = match compare_methods_at(first, second, alpha) {
        Ok(r) => (PairStatus::Tested, Some(r), None),
        Err(EvalError::InvalidSeries(SeriesError::NoDifference)) => (
            PairStatus::NoDifference,
            Some(TestResult::no_difference()),
            None,
        ),
        Err(e) => {
            warn!(first = %first.method, second = %second.method, error = %e, "pair not tested");
            (PairStatus::Failed, None, Some(e.to_string()))
        }
    };
    PairOutcome {
        first: first.method.clone(),
        second: second.method.clone(),
        first_mean: first.mean().unwrap_or(f64::NAN),
        second_mean: second.mean().unwrap_or(f64::NAN),
        status,
        result,
        error,
    }
}

pub fn inspect_image<S>(
    source: &S,
    gt_method: &str,
    method: &str,
    index: usize,
    policy: ZeroDivisionPolicy,
) -> Result<ImageInspection, SweepError>
where
    S: MaskSource + ?Sized,
{
    validate_image_index(index).map_err(SweepError::Invalid)?;
    let gt = source.load_image(gt_method, index)?;
    let seg = source.load_image(method, index)?;
    let confusion = compute_confusion(&gt, &seg)?;
    let metrics = metrics_from_confusion(&confusion, policy)?;
    Ok(ImageInspection {
        ground_truth: gt_method.to_string(),
        method: method.to_string(),
        index,
        confusion,
        metrics,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_sweep.rs"]
mod tests;
