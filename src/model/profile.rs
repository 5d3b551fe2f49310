use serde::Serialize;

use crate::model::metrics::{ScoreMetric, ZeroDivisionPolicy};

pub const DEFAULT_ALPHA: f64 = 0.05;
pub const DEFAULT_IMAGE_COUNT: usize = 20;
/// Image files are matched on a two-digit index prefix.
pub const MAX_IMAGE_INDEX: usize = 99;

pub const DEFAULT_GT_METHOD: &str = "Ground Truth - Vessel Segmentation 1";

/// Method directories of the DRIVE retinal vessel dataset.
pub const DRIVE_METHODS: &[&str] = &[
    "Ground Truth - Vessel Segmentation 1",
    "Ground Truth - Vessel Segmentation 2",
    "Results - 1989 Chaud",
    "Results - 1999 Perez",
    "Results - 2001 Zana",
    "Results - 2003 Jiang",
    "Results - 2004 Niemeijer",
    "Results - 2004 Staal",
    "Results - 2008 Soares",
    "Results - 2014 Chowdhury",
    "Results - 2015 Chowdhury",
];

#[derive(Debug, Clone, Serialize)]
pub struct EvalProfile {
    pub alpha: f64,
    pub image_count: usize,
    pub metric: ScoreMetric,
    pub zero_policy: ZeroDivisionPolicy,
}

impl EvalProfile {
    pub fn default_v1() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            image_count: DEFAULT_IMAGE_COUNT,
            metric: ScoreMetric::F1,
            zero_policy: ZeroDivisionPolicy::Fail,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        if self.image_count == 0 {
            return Err("image count must be at least 1".to_string());
        }
        if self.image_count > MAX_IMAGE_INDEX {
            return Err("image count must fit a two-digit index".to_string());
        }
        Ok(())
    }
}

pub fn validate_image_index(index: usize) -> Result<(), String> {
    if index == 0 || index > MAX_IMAGE_INDEX {
        return Err(format!(
            "image index must be in 1..={MAX_IMAGE_INDEX}, got {index}"
        ));
    }
    Ok(())
}

impl Default for EvalProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

pub fn builtin_methods() -> Vec<String> {
    DRIVE_METHODS.iter().map(|m| m.to_string()).collect()
}
