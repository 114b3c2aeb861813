use thiserror::Error;

/// Errors that can occur while validating solver input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Value at position {index} is not a finite number: {value}")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("Target must be a finite number: {0}")]
    NonFiniteTarget(f64),
    #[error("Tolerance must be a finite, non-negative number: {0}")]
    InvalidTolerance(f64),
}
