//! Time-bounded solve drivers.
//!
//! # Algorithm
//!
//! Each driver takes an optional starting tour (nearest-neighbor
//! construction runs if none is given) and repeats single local-search
//! scans until one reports no improvement or the wall-clock budget is
//! spent. [`solve_k_opt`] runs k from 2 up to `k_max`, quiescing at each
//! k before advancing; a timeout breaks out of both loops.
//!
//! The budget check uses a monotonic clock ([`std::time::Instant`]) and
//! sits at the top of the scan loop, so timeouts take effect only at
//! scan boundaries: an in-progress scan always completes first, and a
//! zero budget returns the starting tour untouched. Timeout is a normal
//! exit, never an error — the tour returned is whatever the search held
//! at that moment, always a valid permutation.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::SolverConfig;
use crate::constructive::nearest_neighbor;
use crate::local_search::{k_opt_step, two_opt_step};
use crate::models::{Point, Tour};

/// Outcome of a solve run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Best tour found.
    pub tour: Tour,
    /// Length of the best tour.
    pub length: f64,
    /// Whether the tour is proven optimal. Always `false`: these drivers
    /// are heuristic and never establish optimality.
    pub proven_optimal: bool,
    /// Completed local-search scans, quiescent ones included.
    pub iterations: usize,
}

/// Runs 2-opt local search to quiescence or until the budget is spent.
///
/// # Examples
///
/// ```
/// use tsp_kopt::models::Point;
/// use tsp_kopt::solver::{solve_two_opt, SolverConfig};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let result = solve_two_opt(&points, None, &SolverConfig::default());
/// assert!((result.length - 4.0).abs() < 1e-10);
/// assert!(!result.proven_optimal);
/// ```
pub fn solve_two_opt(
    points: &[Point],
    initial: Option<Tour>,
    config: &SolverConfig,
) -> SolveResult {
    let started = Instant::now();
    let mut tour = initial.unwrap_or_else(|| nearest_neighbor(points));
    let mut length = tour.length(points);
    let mut iterations = 0;

    loop {
        if budget_spent(started, config.time_budget) {
            break;
        }
        match two_opt_step(points, &tour) {
            Some((next, next_length)) => {
                tour = next;
                length = next_length;
                iterations += 1;
            }
            None => {
                iterations += 1;
                break;
            }
        }
    }

    SolveResult {
        tour,
        length,
        proven_optimal: false,
        iterations,
    }
}

/// Runs k-opt local search for k = 2 up to `config.k_max`, quiescing at
/// each k, until done or the budget is spent.
///
/// With `k_max = 2` this quiesces to the same tour as [`solve_two_opt`]
/// from the same start: k = 2 is the same move family in the same scan
/// order.
///
/// # Examples
///
/// ```
/// use tsp_kopt::models::Point;
/// use tsp_kopt::solver::{solve_k_opt, SolverConfig};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let result = solve_k_opt(&points, None, &SolverConfig::default().with_k_max(3));
/// assert!((result.length - 4.0).abs() < 1e-10);
/// assert_eq!(result.tour.len(), 4);
/// ```
pub fn solve_k_opt(points: &[Point], initial: Option<Tour>, config: &SolverConfig) -> SolveResult {
    let started = Instant::now();
    let mut tour = initial.unwrap_or_else(|| nearest_neighbor(points));
    let mut length = tour.length(points);
    let mut iterations = 0;

    'outer: for k in 2..=config.k_max {
        loop {
            if budget_spent(started, config.time_budget) {
                break 'outer;
            }
            match k_opt_step(points, &tour, k) {
                Some((next, next_length)) => {
                    tour = next;
                    length = next_length;
                    iterations += 1;
                }
                None => {
                    iterations += 1;
                    break;
                }
            }
        }
    }

    SolveResult {
        tour,
        length,
        proven_optimal: false,
        iterations,
    }
}

fn budget_spent(started: Instant, budget: Option<Duration>) -> bool {
    budget.is_some_and(|b| started.elapsed() >= b)
}
