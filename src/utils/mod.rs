//! Input validation shared by the library entry points and the CLI

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::{validate_target, validate_tolerance, validate_values};

#[cfg(test)]
mod tests;
