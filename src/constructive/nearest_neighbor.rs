//! Nearest-neighbor tour construction.
//!
//! Builds a tour greedily: starting from the start vertex, always visit the
//! nearest unvisited vertex. When every remaining vertex is unreachable from
//! the current one, the lowest-index unvisited vertex is taken instead so the
//! tour always covers all vertices.
//!
//! # Complexity
//!
//! O(n²) where n = number of vertices.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. While tour quality is
//! typically 15-25% above optimal, it provides a fast starting point for
//! local search.

use crate::distance::DistanceMatrix;

/// Returns a visiting order over all vertices of `distances`, starting at
/// `start`.
///
/// Ties go to the lowest index. Returns an empty order for an empty matrix.
///
/// # Panics
///
/// Panics if `start` is out of bounds for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use city_route::distance::DistanceMatrix;
/// use city_route::constructive::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 9.0, 1.0],
///     vec![9.0, 0.0, 2.0],
///     vec![1.0, 2.0, 0.0],
/// ]).unwrap();
/// assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    while order.len() < n {
        let remaining: Vec<usize> = (0..n).filter(|&i| !visited[i]).collect();
        // Falls back to the lowest unvisited index when nothing is reachable
        let Some(next) = distances
            .nearest_neighbor(current, &remaining)
            .or_else(|| remaining.first().copied())
        else {
            break;
        };

        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}
