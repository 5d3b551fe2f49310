use super::*;
use crate::error::SeriesError;
use crate::model::verdict::PValueMethod;

#[test]
fn test_clearly_superior_series() {
    let a = ScoreSeries::new("a", vec![0.9; 20]);
    let b = ScoreSeries::new("b", vec![0.1; 20]);
    let r = compare_methods(&a, &b).unwrap();
    assert!(r.first_is_superior);
    assert!(r.p_value < 0.05);
    assert_eq!(r.n_nonzero, 20);

    let reverse = compare_methods(&b, &a).unwrap();
    assert!(!reverse.first_is_superior);
    assert!(reverse.p_value > 0.95);
}

#[test]
fn test_self_comparison_signals_no_difference() {
    let a = ScoreSeries::new("a", vec![0.71, 0.64, 0.80, 0.77]);
    let err = compare_methods(&a, &a).unwrap_err();
    assert_eq!(err, EvalError::InvalidSeries(SeriesError::NoDifference));

    let fallback = TestResult::no_difference();
    assert_eq!(fallback.p_value, 1.0);
    assert!(!fallback.first_is_superior);
    assert_eq!(fallback.method, PValueMethod::NoDifference);
}

#[test]
fn test_alpha_controls_verdict() {
    // exact p = 1/32
    let a = ScoreSeries::new("a", vec![0.5, 0.6, 0.7, 0.8, 0.9]);
    let b = ScoreSeries::new("b", vec![0.49, 0.58, 0.67, 0.76, 0.85]);
    let loose = compare_methods_at(&a, &b, 0.05).unwrap();
    let strict = compare_methods_at(&a, &b, 0.01).unwrap();
    assert_eq!(loose.method, PValueMethod::Exact);
    assert!((loose.p_value - 1.0 / 32.0).abs() < 1e-12);
    assert!(loose.first_is_superior);
    assert!(!strict.first_is_superior);
}

#[test]
fn test_both_directions_never_both_significant() {
    let a = ScoreSeries::new(
        "a",
        vec![0.62, 0.70, 0.55, 0.81, 0.66, 0.73, 0.59, 0.68, 0.77, 0.64],
    );
    let b = ScoreSeries::new(
        "b",
        vec![0.60, 0.74, 0.51, 0.79, 0.69, 0.70, 0.61, 0.63, 0.72, 0.66],
    );
    let ab = compare_methods(&a, &b).unwrap();
    let ba = compare_methods(&b, &a).unwrap();
    assert!(!(ab.first_is_superior && ba.first_is_superior));
}

#[test]
fn test_invalid_series() {
    let a = ScoreSeries::new("a", vec![0.5, 0.6]);
    let b = ScoreSeries::new("b", vec![0.5]);
    assert!(matches!(
        compare_methods(&a, &b),
        Err(EvalError::InvalidSeries(SeriesError::LengthMismatch { .. }))
    ));
    let empty = ScoreSeries::new("e", vec![]);
    assert_eq!(
        compare_methods(&empty, &empty),
        Err(EvalError::InvalidSeries(SeriesError::Empty))
    );
}
