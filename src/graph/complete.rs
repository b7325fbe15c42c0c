//! Complete-graph edge enumeration.

use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::models::Edge;

/// Enumerates every unordered pair `(i, j)`, `i < j`, as an [`Edge`] weighted
/// by `distances.get(i, j)`, in lexicographic order.
///
/// Fails with [`RouteError::MalformedMatrix`] if the matrix size differs from
/// `vertex_count` or the matrix has negative, NaN, or non-zero diagonal
/// entries. Unreachable pairs are kept with infinite weight.
///
/// # Examples
///
/// ```
/// use city_route::distance::DistanceMatrix;
/// use city_route::graph::build_complete_graph;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// let edges = build_complete_graph(3, &dm).unwrap();
/// assert_eq!(edges.len(), 3);
/// assert_eq!((edges[2].u, edges[2].v, edges[2].weight), (1, 2, 3.0));
/// ```
pub fn build_complete_graph(vertex_count: usize, distances: &DistanceMatrix) -> Result<Vec<Edge>> {
    if distances.size() != vertex_count {
        return Err(RouteError::MalformedMatrix(format!(
            "matrix has {} locations, expected {vertex_count}",
            distances.size()
        )));
    }
    distances.validate()?;

    let mut edges = Vec::with_capacity(vertex_count * vertex_count.saturating_sub(1) / 2);
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            edges.push(Edge::new(i, j, distances.get(i, j)));
        }
    }
    Ok(edges)
}
