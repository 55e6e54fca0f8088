//! 2-opt edge exchange.
//!
//! # Algorithm
//!
//! A move picks two interior cut positions `start < end` (position 0 is
//! the cycle's anchor and never moves) and reverses `tour[start..=end]`.
//! Exactly two edges change — the one entering `start` and the one
//! leaving `end` (wrapping to position 0 when `end` is last) — so the
//! candidate is scored by the O(1) incremental formula:
//!
//! ```text
//! delta = d(t[start-1], t[end]) + d(t[start], t[end+1])
//!       - d(t[start-1], t[start]) - d(t[end], t[end+1])
//! ```
//!
//! One scan enumerates all pairs in lexicographic order and applies the
//! first strict improvement (first-improvement strategy); the caller
//! repeats scans until quiescence.
//!
//! # Complexity
//!
//! O(n²) candidate pairs per scan, O(1) each.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::models::{Point, Tour};

/// Improvements smaller than this are treated as floating-point noise.
pub(crate) const EPSILON: f64 = 1e-10;

/// Runs one first-improvement 2-opt scan.
///
/// Enumerates cut pairs `1 <= start < end <= n-1` in lexicographic order
/// and applies the first move whose incremental length is strictly below
/// the current length. Returns the improved tour and its length, or
/// `None` if the tour is 2-opt quiescent (including every tour with
/// fewer than three points, which admits no move at all).
///
/// # Examples
///
/// ```
/// use tsp_kopt::models::{Point, Tour};
/// use tsp_kopt::local_search::two_opt_step;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// // Crossed tour: 2-opt uncrosses it in one move
/// let crossed = Tour::new(vec![0, 2, 1, 3]);
/// let (improved, length) = two_opt_step(&points, &crossed).unwrap();
/// assert!(length < crossed.length(&points));
/// assert!(improved.is_permutation());
/// ```
pub fn two_opt_step(points: &[Point], tour: &Tour) -> Option<(Tour, f64)> {
    let n = tour.len();
    if n < 3 {
        return None;
    }

    let length = tour.length(points);
    for start in 1..n - 1 {
        for end in start + 1..n {
            if two_opt_delta(points, tour.as_slice(), start, end) < -EPSILON {
                return Some(two_swap(points, tour, length, start, end));
            }
        }
    }
    None
}

/// Applies the 2-opt move at `(start, end)`: reverses `tour[start..=end]`
/// and returns the new tour with its incrementally updated length.
///
/// The returned length equals a full recomputation of the new tour's
/// length up to floating-point rounding.
///
/// # Panics
///
/// Panics if `start` is 0 or `end` is out of bounds.
pub fn two_swap(
    points: &[Point],
    tour: &Tour,
    length: f64,
    start: usize,
    end: usize,
) -> (Tour, f64) {
    let new_length = length + two_opt_delta(points, tour.as_slice(), start, end);
    let mut order = tour.as_slice().to_vec();
    order[start..=end].reverse();
    (Tour::new(order), new_length)
}

/// Length change from reversing `order[start..=end]`, in O(1).
///
/// After the reversal `order[end]` sits at position `start` and
/// `order[start]` at position `end`; the edge leaving `end` wraps to
/// position 0 when `end` is the last index.
fn two_opt_delta(points: &[Point], order: &[usize], start: usize, end: usize) -> f64 {
    let wrap = (end + 1) % order.len();

    let removed = points[order[start - 1]].distance_to(&points[order[start]])
        + points[order[end]].distance_to(&points[order[wrap]]);
    let added = points[order[start - 1]].distance_to(&points[order[end]])
        + points[order[start]].distance_to(&points[order[wrap]]);

    added - removed
}
