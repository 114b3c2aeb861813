use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if any value is NaN or infinite.
pub fn validate_values(values: &[f64]) -> Result<(), UtilsError> {
    debug!("Validating {} input values: {:?}", values.len(), values);

    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        warn!("Input value {} at position {} is not finite", value, index);
        return Err(UtilsError::NonFiniteValue { index, value });
    }

    debug!("Input validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if the target is NaN or infinite.
pub fn validate_target(target: f64) -> Result<(), UtilsError> {
    if !target.is_finite() {
        warn!("Target {} is not finite", target);
        return Err(UtilsError::NonFiniteTarget(target));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the tolerance is negative, NaN or infinite.
pub fn validate_tolerance(tolerance: f64) -> Result<(), UtilsError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        warn!("Tolerance {} is not usable", tolerance);
        return Err(UtilsError::InvalidTolerance(tolerance));
    }
    Ok(())
}
