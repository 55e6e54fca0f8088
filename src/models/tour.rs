//! Tour: a cyclic permutation of point indices.

use serde::{Deserialize, Serialize};

use super::Point;

/// An ordered sequence of point indices forming a closed tour.
///
/// The sequence is a permutation of `0..n`; the edge from the last entry
/// back to the first is implicit. Local-search moves replace the whole
/// sequence atomically, so a tour observed at any moment is always a
/// valid permutation.
///
/// # Examples
///
/// ```
/// use tsp_kopt::models::{Point, Tour};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let tour = Tour::new(vec![0, 1, 2, 3]);
/// assert!((tour.length(&points) - 4.0).abs() < 1e-10);
/// assert!(tour.is_permutation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Creates a tour visiting points in the given order.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Creates the trivial tour visiting points in input order.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no points.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visiting order as a slice of point indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_inner(self) -> Vec<usize> {
        self.order
    }

    /// Total cyclic length: the sum of Euclidean distances between
    /// consecutive entries plus the wrap-around edge. O(n).
    pub fn length(&self, points: &[Point]) -> f64 {
        cycle_length(&self.order, points)
    }

    /// Returns `true` if the tour is a permutation of `0..len()`.
    ///
    /// Every operator in this crate preserves this; the check exists for
    /// tests and for validating externally supplied starting tours.
    pub fn is_permutation(&self) -> bool {
        let n = self.order.len();
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

impl From<Vec<usize>> for Tour {
    fn from(order: Vec<usize>) -> Self {
        Self::new(order)
    }
}

/// Cyclic length of a visiting order given as a raw index slice.
///
/// Shared with the k-opt operator, which scores candidate reassemblies
/// out of a scratch buffer before a `Tour` exists.
pub(crate) fn cycle_length(order: &[usize], points: &[Point]) -> f64 {
    let n = order.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = points[order[n - 1]].distance_to(&points[order[0]]);
    for w in order.windows(2) {
        total += points[w[0]].distance_to(&points[w[1]]);
    }
    total
}
