//! Evaluation of binary segmentation masks against ground truth and paired
//! one-sided comparison of segmentation methods.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the caller.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use error::{EvalError, SeriesError, SweepError};
pub use input::{DatasetDir, LoadError, MaskDecoder, MaskSource, TextGridDecoder};
pub use model::confusion::ConfusionMatrix;
pub use model::mask::{Mask, RawImage, Shape};
pub use model::metrics::{PerformanceMetrics, ScoreMetric, ZeroDivisionPolicy};
pub use model::profile::EvalProfile;
pub use model::series::ScoreSeries;
pub use model::verdict::{PValueMethod, TestResult};
pub use pipeline::stage1_confusion::compute_confusion;
pub use pipeline::stage2_metrics::{compute_metrics, compute_metrics_with, metrics_from_confusion};
pub use pipeline::stage3_scores::{MethodComparator, compute_method_scores};
pub use pipeline::stage4_test::{compare_methods, compare_methods_at};
pub use pipeline::stage5_sweep::{SweepInputs, inspect_image, run_sweep};
