// Defaults for the solver configuration
pub const DEFAULT_TARGET: f64 = 24.0;
// Input length limit applied by the command line front end
pub const DEFAULT_MAX_VALUES: usize = 6;
pub const REPORT_HEADER: &str = "unique solutions:";
