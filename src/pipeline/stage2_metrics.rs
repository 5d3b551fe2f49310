use crate::error::EvalError;
use crate::model::confusion::ConfusionMatrix;
use crate::model::mask::Mask;
use crate::model::metrics::{PerformanceMetrics, ZeroDivisionPolicy};
use crate::pipeline::stage1_confusion::compute_confusion;

pub fn compute_metrics(gt: &Mask, seg: &Mask) -> Result<PerformanceMetrics, EvalError> {
    compute_metrics_with(gt, seg, ZeroDivisionPolicy::default())
}

pub fn compute_metrics_with(
    gt: &Mask,
    seg: &Mask,
    policy: ZeroDivisionPolicy,
) -> Result<PerformanceMetrics, EvalError> {
    let confusion = compute_confusion(gt, seg)?;
    metrics_from_confusion(&confusion, policy)
}

pub fn metrics_from_confusion(
    cm: &ConfusionMatrix,
    policy: ZeroDivisionPolicy,
) -> Result<PerformanceMetrics, EvalError> {
    let sensitivity = ratio(
        cm.true_positives,
        cm.actual_positives(),
        "sensitivity",
        policy,
    )?;
    let specificity = ratio(
        cm.true_negatives,
        cm.actual_negatives(),
        "specificity",
        policy,
    )?;
    // no predicted positives counts as perfect precision
    let precision = if cm.predicted_positives() == 0 {
        1.0
    } else {
        cm.true_positives as f64 / cm.predicted_positives() as f64
    };
    let f1_score = f1(precision, sensitivity);

    Ok(PerformanceMetrics {
        sensitivity,
        specificity,
        precision,
        f1_score,
    })
}

fn ratio(
    num: u64,
    den: u64,
    metric: &'static str,
    policy: ZeroDivisionPolicy,
) -> Result<f64, EvalError> {
    if den > 0 {
        return Ok(num as f64 / den as f64);
    }
    match policy {
        ZeroDivisionPolicy::Fail => Err(EvalError::UndefinedMetric { metric }),
        ZeroDivisionPolicy::Perfect => Ok(1.0),
        ZeroDivisionPolicy::Nan => Ok(f64::NAN),
    }
}

// p + s == 0 only when tp == 0, where 2tp / (2tp + fp + fn) is 0.
fn f1(precision: f64, sensitivity: f64) -> f64 {
    let denom = precision + sensitivity;
    if denom == 0.0 {
        return 0.0;
    }
    2.0 * precision * sensitivity / denom
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_metrics.rs"]
mod tests;
