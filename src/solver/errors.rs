use thiserror::Error;

use crate::utils::UtilsError;

/// Errors that can occur during solving
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Too many values: got {count}, at most {max} are supported")]
    TooManyValues { count: usize, max: usize },
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
