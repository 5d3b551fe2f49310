use super::*;

#[test]
fn test_exact_all_positive() {
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let b = vec![0.0; 5];
    let out = signed_rank_greater(&a, &b).unwrap();
    assert_eq!(out.method, PValueMethod::Exact);
    assert_eq!(out.statistic, 15.0);
    assert!((out.p_value - 1.0 / 32.0).abs() < 1e-12);
}

#[test]
fn test_exact_mixed_signs() {
    // d = [1, 2, 3, 4, -5] -> R+ = 10, ten of 32 subsets reach it
    let a = vec![1.0, 2.0, 3.0, 4.0, 0.0];
    let b = vec![0.0, 0.0, 0.0, 0.0, 5.0];
    let out = signed_rank_greater(&a, &b).unwrap();
    assert_eq!(out.statistic, 10.0);
    assert_eq!(out.n_nonzero, 5);
    assert!((out.p_value - 10.0 / 32.0).abs() < 1e-12);
}

#[test]
fn test_exact_all_negative_is_one() {
    let a = vec![0.0; 6];
    let b = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let out = signed_rank_greater(&a, &b).unwrap();
    assert_eq!(out.statistic, 0.0);
    assert!((out.p_value - 1.0).abs() < 1e-12);
}

#[test]
fn test_constant_shift_uses_tie_corrected_normal() {
    let a = vec![0.9; 20];
    let b = vec![0.1; 20];
    let out = signed_rank_greater(&a, &b).unwrap();
    assert_eq!(out.method, PValueMethod::NormalApprox);
    assert_eq!(out.statistic, 210.0);
    // z = 105 / sqrt(717.5 - 166.25)
    assert!(out.p_value < 1e-5);
    assert!(out.p_value > 0.0);
}

#[test]
fn test_zero_difference_forces_normal_approx() {
    let a = vec![1.0, 2.0, 3.0, 0.0];
    let b = vec![0.0; 4];
    let out = signed_rank_greater(&a, &b).unwrap();
    assert_eq!(out.method, PValueMethod::NormalApprox);
    assert_eq!(out.n_nonzero, 3);
    assert_eq!(out.statistic, 6.0);
    assert!((out.p_value - 0.0544).abs() < 1e-3);
}

#[test]
fn test_large_sample_uses_normal_approx() {
    let a = (1..=60).map(|v| v as f64).collect::<Vec<_>>();
    let b = vec![0.0; 60];
    let out = signed_rank_greater(&a, &b).unwrap();
    assert_eq!(out.method, PValueMethod::NormalApprox);
    assert!(out.p_value < 1e-6);
}

#[test]
fn test_opposite_directions_not_both_significant() {
    let a = vec![0.81, 0.74, 0.79, 0.70, 0.77, 0.83, 0.69, 0.72, 0.78, 0.76];
    let b = vec![0.78, 0.75, 0.71, 0.66, 0.70, 0.80, 0.71, 0.65, 0.74, 0.70];
    let ab = signed_rank_greater(&a, &b).unwrap();
    let ba = signed_rank_greater(&b, &a).unwrap();
    assert!(!(ab.p_value < 0.05 && ba.p_value < 0.05));
    assert!(ab.p_value < ba.p_value);
}

#[test]
fn test_identical_series_is_no_difference() {
    let a = vec![0.4, 0.5, 0.6];
    assert_eq!(
        signed_rank_greater(&a, &a),
        Err(SeriesError::NoDifference)
    );
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        signed_rank_greater(&[1.0, 2.0], &[1.0]),
        Err(SeriesError::LengthMismatch {
            first: 2,
            second: 1
        })
    );
    assert_eq!(signed_rank_greater(&[], &[]), Err(SeriesError::Empty));
    assert_eq!(
        signed_rank_greater(&[1.0, f64::NAN], &[0.0, 0.0]),
        Err(SeriesError::NonFinite { index: 2 })
    );
}
