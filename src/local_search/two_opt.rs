//! Closed-tour 2-opt improvement.
//!
//! # Algorithm
//!
//! The tour is a cycle: the last vertex returns to the first. For every pair
//! of positions `1 ≤ i < k < n`, reverse the segment `[i..=k]` and measure the
//! full cycle length of the result, closing edge included. A candidate that is
//! strictly shorter than the best tour so far (beyond a tolerance relative to
//! the tour length) is adopted immediately and the
//! scan continues from the next pair on the new tour. Passes repeat until one
//! finds no improvement or [`MAX_TWO_OPT_PASSES`] is reached.
//!
//! Position 0 never moves, so the tour keeps its start vertex. Measuring the
//! whole cycle rather than the four changed edges keeps the result correct for
//! asymmetric matrices, where reversing a segment changes every edge inside it.
//!
//! # Complexity
//!
//! O(n³) per pass. Intended for small n.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

/// Upper bound on full improvement passes.
pub const MAX_TWO_OPT_PASSES: usize = 100;

/// Relative gain a candidate must show over the current length. Scaled by
/// the tour length so that summation noise on meter-scale tours never counts
/// as an improvement.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Applies 2-opt to a closed tour (given as a visiting order).
///
/// Returns the improved order and its cycle length. The result is never
/// longer than the input.
///
/// # Examples
///
/// ```
/// use city_route::distance::DistanceMatrix;
/// use city_route::local_search::{tour_length, two_opt_improve};
///
/// // Unit square, corners 0-1-2-3 in order around the edge
/// let s = 2f64.sqrt();
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, s, 1.0],
///     vec![1.0, 0.0, 1.0, s],
///     vec![s, 1.0, 0.0, 1.0],
///     vec![1.0, s, 1.0, 0.0],
/// ]).unwrap();
///
/// // 0→2→1→3→0 crosses itself
/// let (improved, dist) = two_opt_improve(&[0, 2, 1, 3], &dm);
/// assert!(dist < tour_length(&[0, 2, 1, 3], &dm));
/// assert!((dist - 4.0).abs() < 1e-10);
/// assert_eq!(improved[0], 0);
/// ```
pub fn two_opt_improve(tour: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = tour.to_vec();
    let mut best = tour_length(&current, distances);
    let n = current.len();
    if n < 3 {
        return (current, best);
    }

    let mut passes = 0;
    let mut improved = true;
    while improved && passes < MAX_TWO_OPT_PASSES {
        improved = false;
        passes += 1;

        for i in 1..n - 1 {
            for k in i + 1..n {
                current[i..=k].reverse();
                let candidate = tour_length(&current, distances);
                if improves(candidate, best) {
                    best = candidate;
                    improved = true;
                } else {
                    current[i..=k].reverse();
                }
            }
        }
    }

    log::debug!("2-opt finished after {passes} passes, length {best}");
    (current, best)
}

/// Strict improvement test. An infinite `best` is beaten by any finite
/// candidate.
fn improves(candidate: f64, best: f64) -> bool {
    if !best.is_finite() {
        return candidate < best;
    }
    candidate < best - IMPROVEMENT_EPS * best.abs().max(1.0)
}

/// Length of the closed tour `tour[0] → … → tour[n-1] → tour[0]`.
///
/// Infinite if any leg is unreachable; zero for fewer than two vertices.
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }
    let legs: f64 = tour.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    legs + distances.get(tour[tour.len() - 1], tour[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        let s = 2f64.sqrt();
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, s, 1.0],
            vec![1.0, 0.0, 1.0, s],
            vec![s, 1.0, 0.0, 1.0],
            vec![1.0, s, 1.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_2opt_already_optimal() {
        let (improved, dist) = two_opt_improve(&[0, 1, 2, 3], &square());
        assert_eq!(improved, vec![0, 1, 2, 3]);
        assert!((dist - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_uncrosses() {
        let (improved, dist) = two_opt_improve(&[0, 2, 1, 3], &square());
        // Reversing positions 1..=2 gives 0,1,2,3
        assert_eq!(improved, vec![0, 1, 2, 3]);
        assert!((dist - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_keeps_start() {
        let (improved, _) = two_opt_improve(&[3, 1, 0, 2], &square());
        assert_eq!(improved[0], 3);
        let mut sorted = improved.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_2opt_three_cities_unchanged() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .expect("square");
        let (improved, dist) = two_opt_improve(&[0, 1, 2], &dm);
        assert_eq!(improved, vec![0, 1, 2]);
        assert!((dist - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_ignores_rounding_sized_gain() {
        // Reverse direction is shorter by 3e-4 on a 3e7 tour, far below the
        // relative tolerance
        let (fwd, back) = (1.0e7, 1.0e7 - 1.0e-4);
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, fwd, back],
            vec![back, 0.0, fwd],
            vec![fwd, back, 0.0],
        ])
        .expect("square");
        let (improved, _) = two_opt_improve(&[0, 1, 2], &dm);
        assert_eq!(improved, vec![0, 1, 2]);
    }

    #[test]
    fn test_2opt_keeps_direction_on_meter_scale_mirror() {
        // Symmetric meter-scale triangle: both directions are the same cycle
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 11_234_567.891, 9_876_543.219],
            vec![11_234_567.891, 0.0, 12_874_316.501],
            vec![9_876_543.219, 12_874_316.501, 0.0],
        ])
        .expect("square");
        assert_eq!(two_opt_improve(&[0, 1, 2], &dm).0, vec![0, 1, 2]);
        assert_eq!(two_opt_improve(&[0, 2, 1], &dm).0, vec![0, 2, 1]);
    }

    #[test]
    fn test_2opt_asymmetric_direction() {
        // Going 0→1→2→0 is cheap, the reverse direction is expensive
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 10.0],
            vec![10.0, 0.0, 1.0],
            vec![1.0, 10.0, 0.0],
        ])
        .expect("square");
        let (improved, dist) = two_opt_improve(&[0, 2, 1], &dm);
        assert_eq!(improved, vec![0, 1, 2]);
        assert!((dist - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_removes_unreachable_leg() {
        let mut dm = square();
        dm.set_symmetric(0, 2, DistanceMatrix::UNREACHABLE);
        let (improved, dist) = two_opt_improve(&[0, 2, 1, 3], &dm);
        assert!(dist.is_finite());
        assert_eq!(improved, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_2opt_trivial() {
        let dm = square();
        assert_eq!(two_opt_improve(&[], &dm), (vec![], 0.0));
        assert_eq!(two_opt_improve(&[2], &dm), (vec![2], 0.0));
        let (pair, dist) = two_opt_improve(&[0, 1], &dm);
        assert_eq!(pair, vec![0, 1]);
        assert!((dist - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_length() {
        let dm = square();
        assert!((tour_length(&[0, 1, 2, 3], &dm) - 4.0).abs() < 1e-10);
        assert!((tour_length(&[0, 2, 1, 3], &dm) - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-10);
        assert_eq!(tour_length(&[1], &dm), 0.0);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        // Points on a 3x3 grid, deliberately scrambled
        let pts: Vec<(f64, f64)> = (0..9).map(|i| ((i % 3) as f64, (i / 3) as f64)).collect();
        let mut dm = DistanceMatrix::new(9);
        for i in 0..9 {
            for j in 0..9 {
                let (dx, dy) = (pts[i].0 - pts[j].0, pts[i].1 - pts[j].1);
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        let initial = vec![0, 8, 1, 7, 2, 6, 3, 5, 4];
        let initial_dist = tour_length(&initial, &dm);
        let (_, improved_dist) = two_opt_improve(&initial, &dm);
        assert!(improved_dist <= initial_dist + 1e-10);
        assert!(improved_dist < initial_dist);
    }
}
