use serde::Serialize;

/// Pixel counts of one (ground truth, segmentation) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_positives: u64,
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

impl ConfusionMatrix {
    pub fn total(&self) -> u64 {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    pub fn actual_positives(&self) -> u64 {
        self.true_positives + self.false_negatives
    }

    pub fn actual_negatives(&self) -> u64 {
        self.true_negatives + self.false_positives
    }

    pub fn predicted_positives(&self) -> u64 {
        self.true_positives + self.false_positives
    }
}
