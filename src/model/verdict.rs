use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PValueMethod {
    Exact,
    NormalApprox,
    /// Every paired difference was zero; nothing was tested.
    NoDifference,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    pub p_value: f64,
    pub first_is_superior: bool,
    /// Sum of ranks of the positive differences (R+).
    pub statistic: f64,
    pub n_nonzero: usize,
    pub method: PValueMethod,
}

impl TestResult {
    /// Stand-in for paired data without any difference: p = 1, not superior.
    pub fn no_difference() -> Self {
        Self {
            p_value: 1.0,
            first_is_superior: false,
            statistic: 0.0,
            n_nonzero: 0,
            method: PValueMethod::NoDifference,
        }
    }
}
