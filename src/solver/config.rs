//! Solver configuration.

use std::time::Duration;

/// Configuration for the time-bounded solve drivers.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_kopt::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_k_max(3)
///     .with_time_budget(Duration::from_secs(30));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Largest k the k-opt driver runs. k = 2 is plain 2-opt; values
    /// above 3 are rarely tractable beyond tiny instances.
    pub k_max: usize,

    /// Wall-clock budget. `None` runs to a true local optimum.
    ///
    /// The budget is checked only between full scans, so an in-progress
    /// scan always completes before a timeout takes effect.
    pub time_budget: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            k_max: 3,
            time_budget: None,
        }
    }
}

impl SolverConfig {
    pub fn with_k_max(mut self, k_max: usize) -> Self {
        self.k_max = k_max;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.k_max < 2 {
            return Err(format!("k_max must be at least 2, got {}", self.k_max));
        }
        Ok(())
    }
}
