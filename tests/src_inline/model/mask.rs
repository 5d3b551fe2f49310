use super::*;

#[test]
fn test_from_values_casts_nonzero() {
    let mask = Mask::from_values(2, 2, &[0u8, 255, 1, 0]).unwrap();
    assert_eq!(mask.pixels(), &[false, true, true, false]);
    assert_eq!(mask.shape(), Shape::new(2, 2));
    assert_eq!(mask.count_positive(), 2);
}

#[test]
fn test_channels_are_summed_before_cast() {
    // pixel 0: all zero, pixel 1: blue only, pixel 2: +1/-1 cancels out
    let values: Vec<i64> = vec![0, 0, 0, 0, 0, 255, 1, -1, 0];
    let mask = Mask::from_channels(1, 3, 3, &values).unwrap();
    assert_eq!(mask.pixels(), &[false, true, false]);
}

#[test]
fn test_raw_image_collapses_to_mask() {
    let raw = RawImage::new(1, 2, 3, vec![0, 0, 0, 10, 0, 0]).unwrap();
    let mask = raw.to_mask();
    assert_eq!(mask.shape(), Shape::new(1, 2));
    assert_eq!(mask.pixels(), &[false, true]);
}

#[test]
fn test_buffer_length_is_checked() {
    assert_eq!(
        Mask::from_values(2, 2, &[1u8, 0, 1]),
        Err(EvalError::InvalidBuffer {
            expected: 4,
            actual: 3
        })
    );
    assert!(RawImage::new(1, 1, 0, vec![]).is_err());
    assert!(Mask::from_rows(&[vec![1u8, 0], vec![1u8]]).is_err());
}

#[test]
fn test_get_and_inverted() {
    let mask = Mask::from_rows(&[vec![1u8, 0], vec![0u8, 0]]).unwrap();
    assert_eq!(mask.get(0, 0), Some(true));
    assert_eq!(mask.get(1, 1), Some(false));
    assert_eq!(mask.get(2, 0), None);
    let inv = mask.inverted();
    assert_eq!(inv.count_positive(), 3);
    assert_eq!(inv.inverted(), mask);
}

#[test]
fn test_channel_sum_does_not_wrap() {
    let raw = RawImage::new(1, 2, 2, vec![i64::MAX, 1, 0, 0]).unwrap();
    assert_eq!(raw.to_mask().pixels(), &[true, false]);

    // wraps to exactly zero in i64
    let values: Vec<i64> = vec![i64::MIN, i64::MIN];
    let mask = Mask::from_channels(1, 1, 2, &values).unwrap();
    assert_eq!(mask.pixels(), &[true]);

    let cancel: Vec<i64> = vec![i64::MAX, -i64::MAX];
    let mask = Mask::from_channels(1, 1, 2, &cancel).unwrap();
    assert_eq!(mask.pixels(), &[false]);
}

#[test]
fn test_overflowing_dimensions_are_rejected() {
    assert_eq!(
        Mask::from_values(usize::MAX, 2, &[1u8]),
        Err(EvalError::InvalidBuffer {
            expected: usize::MAX,
            actual: 1
        })
    );
    assert!(Mask::from_channels::<u8>(usize::MAX / 2, 2, 3, &[]).is_err());
    assert!(Mask::from_bools(usize::MAX, usize::MAX, vec![true]).is_err());
    assert!(matches!(
        RawImage::new(usize::MAX, 2, 1, vec![]),
        Err(EvalError::InvalidBuffer { .. })
    ));
}
