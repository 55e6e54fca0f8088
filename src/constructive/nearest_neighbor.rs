//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from point 0, always visit the
//! nearest unvisited point next.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! The simplest constructive heuristic for TSP. Solution quality is
//! typically 15-25% above optimal, but it provides a fast baseline for
//! local search to improve.

use crate::models::{Point, Tour};

/// Constructs an initial tour using the nearest-neighbor heuristic.
///
/// The tour starts at index 0 and repeatedly appends the unvisited point
/// nearest to the tour's last entry. Ties go to the lowest index. Empty
/// input yields an empty tour.
///
/// # Examples
///
/// ```
/// use tsp_kopt::models::Point;
/// use tsp_kopt::constructive::nearest_neighbor;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let tour = nearest_neighbor(&points);
/// assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
/// ```
pub fn nearest_neighbor(points: &[Point]) -> Tour {
    let n = points.len();
    if n == 0 {
        return Tour::new(Vec::new());
    }

    let mut visited = vec![false; n];
    visited[0] = true;

    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;

    for _ in 1..n {
        // Strict < keeps ties on the first (lowest) index scanned
        let mut best: Option<(usize, f64)> = None;
        for (i, point) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = points[current].distance_to(point);
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((i, d));
            }
        }

        let (next, _) = best.expect("an unvisited point remains on every pass");
        visited[next] = true;
        order.push(next);
        current = next;
    }

    Tour::new(order)
}
