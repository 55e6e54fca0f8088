//! # tsp-kopt
//!
//! Approximate Euclidean TSP solver: nearest-neighbor construction
//! followed by first-improvement edge-exchange local search (2-opt and
//! generalized k-opt) under an optional wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Tour)
//! - [`constructive`] — Nearest-neighbor initial tour construction
//! - [`local_search`] — 2-opt and k-opt single-scan operators
//! - [`solver`] — Time-bounded drivers and configuration
//! - [`io`] — Textual instance parsing and solution formatting
//!
//! ## Example
//!
//! ```
//! use tsp_kopt::io::parse_instance;
//! use tsp_kopt::solver::{solve_k_opt, SolverConfig};
//!
//! let points = parse_instance("4\n0 0\n0 1\n1 1\n1 0\n").unwrap();
//! let result = solve_k_opt(&points, None, &SolverConfig::default().with_k_max(3));
//! assert!((result.length - 4.0).abs() < 1e-10);
//! ```

pub mod constructive;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;
