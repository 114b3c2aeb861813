use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use twentyfour::solver::constants::{DEFAULT_MAX_VALUES, DEFAULT_TARGET};
use twentyfour::{Solver, SolverConfig, validate_values};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Combine numbers with + - * / to reach a target
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(
    about = "Find every distinct arithmetic expression over the given numbers that equals a target"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine, each used exactly once
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Target value to reach
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: f64,

    /// Accept results within this absolute distance of the target
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Sort the numbers before searching
    #[arg(long)]
    pub sort: bool,

    /// Largest number of values to search
    #[arg(long, default_value_t = DEFAULT_MAX_VALUES)]
    pub max_values: usize,

    /// Only print the number of solutions
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub values: Vec<f64>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    fn from_args(args: CliArgs) -> Result<Self> {
        validate_values(&args.values).context("Invalid input values")?;

        let solver = SolverConfig::default()
            .with_target(args.target)
            .with_tolerance(args.tolerance)
            .with_sorted_inputs(args.sort)
            .with_max_values(Some(args.max_values))
            .with_verbose(!args.quiet);

        Ok(Self {
            values: args.values,
            solver,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let quiet = !config.solver.verbose;
    let solver = Solver::new(config.solver);

    info!(
        "Combining {:?} to reach {}",
        config.values,
        solver.config().target
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let solutions = solver
        .solve_and_report(&config.values, &mut out)
        .context("Search failed")?;

    if solutions.is_empty() {
        warn!("No matching expression found");
    }

    if quiet {
        writeln!(out, "{}", solutions.len()).context("Failed to write output")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: Vec<f64>) -> CliArgs {
        CliArgs {
            values,
            target: DEFAULT_TARGET,
            tolerance: None,
            sort: false,
            max_values: DEFAULT_MAX_VALUES,
            quiet: false,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = CliArgs::try_parse_from(["twentyfour", "4", "7", "8", "8"]);
        assert!(parsed.is_ok());
        if let Ok(args) = parsed {
            assert_eq!(args.values, vec![4.0, 7.0, 8.0, 8.0]);
            assert_eq!(args.target, 24.0);
            assert!(args.tolerance.is_none());
            assert!(!args.sort);
            assert!(!args.quiet);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_with_options() {
        let parsed = CliArgs::try_parse_from([
            "twentyfour",
            "-t",
            "-6",
            "--tolerance",
            "0.001",
            "--sort",
            "-q",
            "-l",
            "debug",
            "3",
            "-2",
        ]);
        assert!(parsed.is_ok());
        if let Ok(args) = parsed {
            assert_eq!(args.values, vec![3.0, -2.0]);
            assert_eq!(args.target, -6.0);
            assert_eq!(args.tolerance, Some(0.001));
            assert!(args.sort);
            assert!(args.quiet);
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_cli_args_require_values() {
        assert!(CliArgs::try_parse_from(["twentyfour"]).is_err());
        assert!(CliArgs::try_parse_from(["twentyfour", "abc"]).is_err());
    }

    #[test]
    fn test_cli_config_from_args() {
        let config = CliConfig::from_args(args(vec![8.0, 3.0]));
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.values, vec![8.0, 3.0]);
            assert_eq!(config.solver.target, 24.0);
            assert!(config.solver.verbose);
            assert_eq!(config.solver.max_values, Some(DEFAULT_MAX_VALUES));
        }

        assert!(CliConfig::from_args(args(vec![1.0, f64::NAN])).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
