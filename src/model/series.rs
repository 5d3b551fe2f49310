use serde::Serialize;

/// Per-image scores of one method; position `i` holds image index `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSeries {
    pub method: String,
    pub scores: Vec<f64>,
}

impl ScoreSeries {
    pub fn new(method: impl Into<String>, scores: Vec<f64>) -> Self {
        Self {
            method: method.into(),
            scores,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        crate::stats::mean(&self.scores)
    }
}
