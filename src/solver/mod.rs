pub mod constants;
mod core;
mod errors;
mod report;

pub use self::core::{Solver, SolverConfig};
pub use errors::SolverError;
pub use report::write_report;
