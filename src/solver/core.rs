use std::collections::HashSet;
use std::io::Write;

use log::{debug, info, warn};

use crate::engine::CombinationEngine;
use crate::solver::constants::DEFAULT_TARGET;
use crate::solver::errors::SolverError;
use crate::solver::report::write_report;
use crate::utils::{validate_target, validate_tolerance, validate_values};
use crate::value::ExpressionValue;

/// Configuration for a solver run
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub target: f64,
    /// Absolute tolerance for matching the target. `None` means exact equality,
    /// which can miss results reached through inexact divisions such as
    /// `8/(3-(8/3))`.
    pub tolerance: Option<f64>,
    /// Sort the input values before searching. Only changes the operand
    /// order shown in descriptions and which equivalent form is reported.
    pub sort_inputs: bool,
    /// Refuse inputs longer than this. `None` searches any number of values.
    pub max_values: Option<usize>,
    /// Write the solutions when using [`Solver::solve_and_report`]
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            tolerance: None,
            sort_inputs: false,
            max_values: None,
            verbose: false,
        }
    }
}

impl SolverConfig {
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_sorted_inputs(mut self, sort_inputs: bool) -> Self {
        self.sort_inputs = sort_inputs;
        self
    }

    pub fn with_max_values(mut self, max_values: Option<usize>) -> Self {
        self.max_values = max_values;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Search driver: seeds the engine, filters by target and removes
/// equivalent solutions
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Every distinct way to reach the target using each value exactly once.
    ///
    /// Solutions are listed in the order the search first reaches them; of
    /// several equivalent forms only the first one found is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a value, the target or the tolerance is not a
    /// finite number, or if more than `max_values` values are given when a
    /// limit is configured.
    pub fn solve(&self, values: &[f64]) -> Result<Vec<ExpressionValue>, SolverError> {
        self.validate(values)?;

        info!(
            "Searching for expressions over {:?} that equal {}",
            values, self.config.target
        );

        let mut inputs = values.to_vec();
        if self.config.sort_inputs {
            inputs.sort_by(f64::total_cmp);
        }
        let leaves: Vec<ExpressionValue> =
            inputs.into_iter().map(ExpressionValue::leaf).collect();

        let mut engine = CombinationEngine::new();
        let end_states = engine.search(&leaves);

        let stats = engine.stats();
        info!(
            "Explored {} states across {} searches ({} cache hits), {} end states",
            stats.states_expanded,
            stats.searches,
            stats.cache_hits,
            end_states.len()
        );

        let mut seen = HashSet::new();
        let solutions: Vec<ExpressionValue> = end_states
            .iter()
            .filter(|candidate| self.matches_target(candidate.value()))
            .filter(|candidate| seen.insert(candidate.key()))
            .cloned()
            .collect();

        if solutions.is_empty() {
            warn!("No expression reaches {}", self.config.target);
        } else {
            info!("Found {} unique solutions", solutions.len());
        }

        Ok(solutions)
    }

    /// Like [`Solver::solve`], additionally writing the solutions to `out`
    /// when the configuration is verbose.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Solver::solve`], plus any error from `out`.
    pub fn solve_and_report<W: Write>(
        &self,
        values: &[f64],
        out: &mut W,
    ) -> Result<Vec<ExpressionValue>, SolverError> {
        let solutions = self.solve(values)?;
        if self.config.verbose {
            write_report(out, &solutions)?;
        }
        Ok(solutions)
    }

    fn validate(&self, values: &[f64]) -> Result<(), SolverError> {
        validate_values(values)?;
        validate_target(self.config.target)?;
        if let Some(tolerance) = self.config.tolerance {
            validate_tolerance(tolerance)?;
        }

        if let Some(max) = self.config.max_values
            && values.len() > max
        {
            warn!("Refusing to search {} values (limit {})", values.len(), max);
            return Err(SolverError::TooManyValues {
                count: values.len(),
                max,
            });
        }

        debug!("Solver input accepted");
        Ok(())
    }

    fn matches_target(&self, value: f64) -> bool {
        match self.config.tolerance {
            Some(tolerance) => (value - self.config.target).abs() <= tolerance,
            None => value == self.config.target,
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
