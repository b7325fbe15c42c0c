//! Approximate TSP: nearest-neighbor construction followed by 2-opt.

use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::local_search::{tour_length, two_opt_improve};
use crate::models::{Edge, TspTour};

/// Computes a closed tour through all `vertex_count` vertices, starting and
/// ending at `start`.
///
/// # Errors
///
/// - [`RouteError::EmptyInput`] if `vertex_count` is zero.
/// - [`RouteError::MalformedMatrix`] if the matrix is not `vertex_count` wide
///   or has invalid entries.
/// - [`RouteError::InvalidStart`] if `start >= vertex_count`.
/// - [`RouteError::UnreachablePair`] if the final tour uses a leg with no
///   finite distance; the first such leg in visiting order is reported,
///   lower index first.
///
/// A single vertex yields one zero-length self-loop.
///
/// # Examples
///
/// ```
/// use city_route::distance::DistanceMatrix;
/// use city_route::tsp::solve_tsp;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// let tour = solve_tsp(3, &dm, 0).unwrap();
/// assert_eq!(tour.order(), &[0, 1, 2]);
/// assert_eq!(tour.total_distance(), 6.0);
/// ```
pub fn solve_tsp(vertex_count: usize, distances: &DistanceMatrix, start: usize) -> Result<TspTour> {
    if vertex_count == 0 {
        return Err(RouteError::EmptyInput);
    }
    if distances.size() != vertex_count {
        return Err(RouteError::MalformedMatrix(format!(
            "matrix has {} locations, expected {vertex_count}",
            distances.size()
        )));
    }
    distances.validate()?;
    if start >= vertex_count {
        return Err(RouteError::InvalidStart {
            start,
            size: vertex_count,
        });
    }

    if vertex_count == 1 {
        return Ok(TspTour::new(vec![start], vec![Edge::new(start, start, 0.0)], 0.0));
    }

    let initial = nearest_neighbor_tour(distances, start);
    let initial_distance = tour_length(&initial, distances);
    let (order, _) = two_opt_improve(&initial, distances);

    let edges = tour_edges(&order, distances);
    if let Some(leg) = edges.iter().find(|e| !e.is_reachable()) {
        return Err(RouteError::UnreachablePair {
            from: leg.u.min(leg.v),
            to: leg.u.max(leg.v),
        });
    }

    let tour = TspTour::new(order, edges, initial_distance);
    log::debug!(
        "Tour over {} locations: nearest neighbor {:.1}, after 2-opt {:.1}",
        vertex_count,
        initial_distance,
        tour.total_distance()
    );
    Ok(tour)
}

/// Directed legs of the closed tour, closing leg last.
fn tour_edges(order: &[usize], distances: &DistanceMatrix) -> Vec<Edge> {
    let n = order.len();
    (0..n)
        .map(|j| {
            let (from, to) = (order[j], order[(j + 1) % n]);
            Edge::new(from, to, distances.get(from, to))
        })
        .collect()
}
