//! First-improvement local search operators over tours.
//!
//! - [`two_opt`] — pairwise edge exchange with O(1) incremental scoring
//! - [`k_opt`] — generalized k-edge exchange, scored by full recomputation
//!
//! Each `*_step` function performs a single scan: it either applies the
//! first improving move found and returns the new tour, or returns `None`
//! at quiescence. The [`solver`](crate::solver) drivers own the outer
//! repeat-until-quiescent loop and the time budget.

mod k_opt;
mod two_opt;

pub use k_opt::k_opt_step;
pub use two_opt::{two_opt_step, two_swap};
