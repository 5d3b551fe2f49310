use rayon::prelude::*;
use tracing::debug;

use crate::error::{EvalError, SeriesError};
use crate::model::mask::Mask;
use crate::model::metrics::{ScoreMetric, ZeroDivisionPolicy};
use crate::model::series::ScoreSeries;
use crate::pipeline::stage2_metrics::compute_metrics_with;

#[derive(Debug, Clone, Copy, Default)]
pub struct MethodComparator {
    pub metric: ScoreMetric,
    pub policy: ZeroDivisionPolicy,
}

impl MethodComparator {
    pub fn new(metric: ScoreMetric, policy: ZeroDivisionPolicy) -> Self {
        Self { metric, policy }
    }

    /// Scores every segmentation against the ground truth at the same index.
    pub fn score_method(
        &self,
        method: &str,
        gts: &[Mask],
        segs: &[Mask],
    ) -> Result<ScoreSeries, EvalError> {
        if gts.len() != segs.len() {
            return Err(SeriesError::LengthMismatch {
                first: gts.len(),
                second: segs.len(),
            }
            .into());
        }
        if gts.is_empty() {
            return Err(SeriesError::Empty.into());
        }

        let scores = gts
            .par_iter()
            .zip(segs.par_iter())
            .map(|(gt, seg)| {
                compute_metrics_with(gt, seg, self.policy).map(|m| self.metric.select(&m))
            })
            .collect::<Result<Vec<f64>, EvalError>>()?;

        debug!(
            method,
            metric = self.metric.label(),
            n_images = scores.len(),
            "scored method"
        );
        Ok(ScoreSeries::new(method, scores))
    }

    pub fn compare_pair(
        &self,
        gts: &[Mask],
        first: (&str, &[Mask]),
        second: (&str, &[Mask]),
    ) -> Result<(ScoreSeries, ScoreSeries), EvalError> {
        if first.1.len() != second.1.len() {
            return Err(SeriesError::LengthMismatch {
                first: first.1.len(),
                second: second.1.len(),
            }
            .into());
        }
        let a = self.score_method(first.0, gts, first.1)?;
        let b = self.score_method(second.0, gts, second.1)?;
        Ok((a, b))
    }
}

/// F1 series of two methods against shared ground truths.
pub fn compute_method_scores(
    gts: &[Mask],
    segs_a: &[Mask],
    segs_b: &[Mask],
) -> Result<(ScoreSeries, ScoreSeries), EvalError> {
    MethodComparator::default().compare_pair(gts, ("first", segs_a), ("second", segs_b))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scores.rs"]
mod tests;
