use crate::error::EvalError;
use crate::model::confusion::ConfusionMatrix;
use crate::model::mask::Mask;

pub fn compute_confusion(gt: &Mask, seg: &Mask) -> Result<ConfusionMatrix, EvalError> {
    if gt.shape() != seg.shape() {
        return Err(EvalError::ShapeMismatch {
            gt: gt.shape(),
            seg: seg.shape(),
        });
    }

    let mut tp = 0u64;
    let mut tn = 0u64;
    let mut fp = 0u64;
    let mut fn_ = 0u64;
    for (&g, &s) in gt.pixels().iter().zip(seg.pixels()) {
        match (g, s) {
            (true, true) => tp += 1,
            (false, false) => tn += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
        }
    }

    Ok(ConfusionMatrix {
        true_positives: tp,
        true_negatives: tn,
        false_positives: fp,
        false_negatives: fn_,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_confusion.rs"]
mod tests;
