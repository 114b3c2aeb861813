use crate::utils::{UtilsError, validate_target, validate_tolerance, validate_values};

#[test]
fn test_validate_values_valid() {
    assert!(validate_values(&[1.0, 2.0, 3.0, 4.0]).is_ok());
    assert!(validate_values(&[0.0, -7.5]).is_ok());
    assert!(validate_values(&[]).is_ok());
}

#[test]
fn test_validate_values_invalid() {
    let result = validate_values(&[1.0, f64::NAN, 3.0]);
    assert!(result.is_err());
    if let Err(UtilsError::NonFiniteValue { index, .. }) = result {
        assert_eq!(index, 1);
    }

    let result = validate_values(&[f64::INFINITY]);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(
            e,
            UtilsError::NonFiniteValue {
                index: 0,
                value: f64::INFINITY
            }
        );
    }
}

#[test]
fn test_validate_target() {
    assert!(validate_target(24.0).is_ok());
    assert!(validate_target(-0.5).is_ok());
    assert!(validate_target(f64::NEG_INFINITY).is_err());
    assert!(validate_target(f64::NAN).is_err());
}

#[test]
fn test_validate_tolerance() {
    assert!(validate_tolerance(0.0).is_ok());
    assert!(validate_tolerance(1e-9).is_ok());
    assert!(validate_tolerance(-1e-9).is_err());
    assert!(validate_tolerance(f64::NAN).is_err());
}
