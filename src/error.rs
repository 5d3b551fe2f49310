use thiserror::Error;

use crate::input::LoadError;
use crate::model::mask::Shape;

#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("shape mismatch: ground truth is {gt}, segmentation is {seg}")]
    ShapeMismatch { gt: Shape, seg: Shape },
    #[error("invalid series: {0}")]
    InvalidSeries(#[from] SeriesError),
    #[error("undefined metric: {metric} has a zero denominator")]
    UndefinedMetric { metric: &'static str },
    #[error("invalid pixel buffer: expected {expected} values, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SeriesError {
    #[error("length mismatch ({first} vs {second})")]
    LengthMismatch { first: usize, second: usize },
    #[error("series is empty")]
    Empty,
    #[error("non-finite score at image index {index}")]
    NonFinite { index: usize },
    #[error("all paired differences are zero; no one-sided difference to test")]
    NoDifference,
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("invalid sweep: {0}")]
    Invalid(String),
}
