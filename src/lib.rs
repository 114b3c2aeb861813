//! Twentyfour - A library for finding arithmetic expressions that reach a target
//!
//! Given a list of numbers, every way of combining all of them with `+`, `-`,
//! `*` and `/` is searched breadth-first. Results that evaluate to the target
//! are returned with algebraically equivalent forms merged, so
//! `6+3*(10-4)` and `6-3*(4-10)` are reported once.

pub mod engine;
pub mod solver;
pub mod utils;
pub mod value;

// Re-export the main public API
pub use engine::{CombinationEngine, EngineStats};
pub use solver::{Solver, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_values};
pub use value::{ExpressionValue, ValueError};

/// Find every distinct expression over `values` that evaluates to `target`
///
/// This is a convenience function that creates a default solver for the
/// given target. Each value is used exactly once per expression.
///
/// # Arguments
///
/// * `values` - The numbers to combine
/// * `target` - The value to reach, compared exactly
///
/// # Returns
///
/// * `Ok(Vec<ExpressionValue>)` - The solutions in the order they were found,
///   empty if the target cannot be reached
/// * `Err(SolverError)` - If the input is not usable
///
/// # Errors
///
/// This function will return an error if:
/// * A value or the target is NaN or infinite
///
/// # Examples
///
/// ```
/// use twentyfour::solve;
///
/// match solve(&[8.0, 3.0], 24.0) {
///     Ok(solutions) => {
///         for solution in &solutions {
///             println!("{} = {}", solution, solution.value());
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(values: &[f64], target: f64) -> Result<Vec<ExpressionValue>, SolverError> {
    let solver = Solver::new(SolverConfig::default().with_target(target));
    solver.solve(values)
}
