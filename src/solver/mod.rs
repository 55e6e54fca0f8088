//! Time-bounded solve drivers and their configuration.
//!
//! - [`SolverConfig`] — k range and wall-clock budget
//! - [`solve_two_opt`] / [`solve_k_opt`] — construction (if needed) plus
//!   local search to quiescence or timeout, yielding a [`SolveResult`]

mod config;
mod driver;

pub use config::SolverConfig;
pub use driver::{solve_k_opt, solve_two_opt, SolveResult};
