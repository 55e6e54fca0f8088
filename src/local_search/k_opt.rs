//! Generalized k-opt edge exchange.
//!
//! # Algorithm
//!
//! A move cuts the tour at k boundaries drawn from `1..=n` (position 0
//! stays anchored; boundary `n` cuts the wrap-around edge). The
//! boundaries leave a fixed prefix, k-1 movable middle segments, and a
//! fixed suffix. Every reassembly — any subset of the middle segments
//! reversed, in any order between the fixed prefix and suffix — is a
//! candidate, scored by full length recomputation: unlike 2-opt, the set
//! of edges a reassembly changes is not bounded by a small constant, so
//! no incremental formula applies.
//!
//! One scan enumerates boundary combinations in lexicographic order,
//! reversal subsets by ascending bit mask, and segment orders by
//! lexicographic permutation, and applies the first strict improvement.
//! With k = 2 there is a single movable segment and the move family
//! collapses to 2-opt, in the same scan order.
//!
//! # Complexity
//!
//! O(n^k) boundary combinations per scan, each examined against
//! O(2^k · k!) reassemblies scored in O(n). Tractable only for small k
//! (practically k ≤ 3) — k is a small constant here, not a scaling
//! parameter.
//!
//! # Reference
//!
//! Lin, S. (1965). "Computer Solutions of the Traveling Salesman
//! Problem", *Bell System Technical Journal* 44(10), 2245-2269.

use super::two_opt::EPSILON;
use crate::models::{cycle_length, Point, Tour};

/// Runs one first-improvement k-opt scan.
///
/// Enumerates all k-boundary cuts and their reassemblies in a fixed
/// deterministic order and applies the first one whose recomputed length
/// is strictly below the current length. Returns the improved tour and
/// its length, or `None` at quiescence. Tours with fewer than three
/// points admit no move.
///
/// # Examples
///
/// ```
/// use tsp_kopt::models::{Point, Tour};
/// use tsp_kopt::local_search::k_opt_step;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let crossed = Tour::new(vec![0, 2, 1, 3]);
/// let (improved, length) = k_opt_step(&points, &crossed, 3).unwrap();
/// assert!(length < crossed.length(&points));
/// assert!(improved.is_permutation());
/// ```
pub fn k_opt_step(points: &[Point], tour: &Tour, k: usize) -> Option<(Tour, f64)> {
    let n = tour.len();
    if n < 3 || k < 2 || k > n {
        return None;
    }

    let length = tour.length(points);
    let segments = k - 1;

    // Reused across every candidate; reassembly never allocates
    let mut scratch: Vec<usize> = Vec::with_capacity(n);
    let mut arrangement: Vec<usize> = Vec::with_capacity(segments);

    let mut boundaries: Vec<usize> = (1..=k).collect();
    loop {
        if let Some(improved) = first_improving_reassembly(
            points,
            tour.as_slice(),
            length,
            &boundaries,
            &mut scratch,
            &mut arrangement,
        ) {
            return Some(improved);
        }
        if !next_combination(&mut boundaries, n) {
            return None;
        }
    }
}

/// Searches every reassembly of the cut at `boundaries` for the first
/// one strictly shorter than `length`.
///
/// The identity reassembly (no reversal, original segment order) is the
/// first enumerated and is skipped.
fn first_improving_reassembly(
    points: &[Point],
    order: &[usize],
    length: f64,
    boundaries: &[usize],
    scratch: &mut Vec<usize>,
    arrangement: &mut Vec<usize>,
) -> Option<(Tour, f64)> {
    let k = boundaries.len();
    let segments = k - 1;
    let prefix = &order[..boundaries[0]];
    let suffix = &order[boundaries[k - 1]..];

    for mask in 0usize..(1 << segments) {
        arrangement.clear();
        arrangement.extend(0..segments);
        let mut identity_order = true;

        loop {
            // mask 0 with the identity order reproduces the input tour
            if mask != 0 || !identity_order {
                scratch.clear();
                scratch.extend_from_slice(prefix);
                for &s in arrangement.iter() {
                    let segment = &order[boundaries[s]..boundaries[s + 1]];
                    if mask & (1 << s) != 0 {
                        scratch.extend(segment.iter().rev());
                    } else {
                        scratch.extend_from_slice(segment);
                    }
                }
                scratch.extend_from_slice(suffix);

                let candidate = cycle_length(scratch, points);
                if candidate < length - EPSILON {
                    return Some((Tour::new(scratch.clone()), candidate));
                }
            }

            identity_order = false;
            if !next_permutation(arrangement) {
                break;
            }
        }
    }
    None
}

/// Advances `combo` to the next k-combination of `1..=max` in
/// lexicographic order. Returns `false` after the last combination.
fn next_combination(combo: &mut [usize], max: usize) -> bool {
    let k = combo.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if combo[i] < max - (k - 1 - i) {
            combo[i] += 1;
            for j in i + 1..k {
                combo[j] = combo[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Advances `perm` to the next permutation in lexicographic order.
/// Returns `false` after the last (descending) permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::two_opt_step;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_next_combination_order() {
        let mut combo = vec![1, 2];
        let mut seen = vec![combo.clone()];
        while next_combination(&mut combo, 4) {
            seen.push(combo.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
    }

    #[test]
    fn test_next_permutation_order() {
        let mut perm = vec![0, 1, 2];
        let mut seen = vec![perm.clone()];
        while next_permutation(&mut perm) {
            seen.push(perm.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_next_permutation_single() {
        let mut perm = vec![0];
        assert!(!next_permutation(&mut perm));
    }

    #[test]
    fn test_step_uncrosses_square() {
        let points = unit_square();
        let crossed = Tour::new(vec![0, 2, 1, 3]);
        for k in 2..=3 {
            let (improved, length) =
                k_opt_step(&points, &crossed, k).expect("improvement exists");
            assert!(length < crossed.length(&points));
            assert!(improved.is_permutation());
            assert!((length - improved.length(&points)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_step_optimal_square_is_quiescent() {
        let points = unit_square();
        let tour = Tour::new(vec![0, 1, 2, 3]);
        assert!(k_opt_step(&points, &tour, 2).is_none());
        assert!(k_opt_step(&points, &tour, 3).is_none());
    }

    #[test]
    fn test_step_degenerate_tours() {
        let points = unit_square();
        assert!(k_opt_step(&points, &Tour::new(vec![]), 2).is_none());
        assert!(k_opt_step(&points, &Tour::new(vec![0]), 2).is_none());
        assert!(k_opt_step(&points, &Tour::new(vec![0, 1]), 2).is_none());
    }

    #[test]
    fn test_step_k_larger_than_tour() {
        let points = unit_square();
        let tour = Tour::new(vec![0, 2, 1, 3]);
        assert!(k_opt_step(&points, &tour, 5).is_none());
    }

    #[test]
    fn test_k2_matches_two_opt_step() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 1.0),
        ];
        let mut tour = Tour::new(vec![0, 3, 5, 2, 1, 4]);
        loop {
            let via_two_opt = two_opt_step(&points, &tour);
            let via_k_opt = k_opt_step(&points, &tour, 2);
            match (via_two_opt, via_k_opt) {
                (Some((a, la)), Some((b, lb))) => {
                    assert_eq!(a.as_slice(), b.as_slice());
                    assert!((la - lb).abs() < 1e-9);
                    tour = a;
                }
                (None, None) => break,
                (a, b) => panic!("steps disagree: {a:?} vs {b:?}"),
            }
        }
    }

    #[test]
    fn test_3opt_finds_move_2opt_misses() {
        // Two interleaved clusters where segment swaps (not plain
        // reversals) are the shortest way out, after 2-opt quiesces.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let mut tour = Tour::new(vec![0, 2, 4, 1, 3, 5]);
        while let Some((next, _)) = two_opt_step(&points, &tour) {
            tour = next;
        }
        // Whatever 2-opt leaves, a 3-opt scan must not worsen it
        let quiescent_length = tour.length(&points);
        if let Some((improved, length)) = k_opt_step(&points, &tour, 3) {
            assert!(length < quiescent_length);
            assert!(improved.is_permutation());
        }
    }

    #[test]
    fn test_step_preserves_permutation() {
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(8.0, 2.0),
            Point::new(3.0, 7.0),
            Point::new(6.0, 5.0),
            Point::new(2.0, 4.0),
            Point::new(7.0, 8.0),
            Point::new(4.0, 3.0),
        ];
        let mut tour = Tour::new(vec![0, 4, 2, 6, 1, 5, 3]);
        while let Some((next, next_length)) = k_opt_step(&points, &tour, 3) {
            assert!(next.is_permutation());
            assert!(next_length < tour.length(&points));
            tour = next;
        }
    }
}
