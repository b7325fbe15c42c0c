//! Kruskal's minimum spanning tree.
//!
//! # Algorithm
//!
//! Sort edges by weight (stable, so equal weights keep their input order),
//! then take each edge whose endpoints are still in different components,
//! stopping once `n − 1` edges are collected.
//!
//! # Complexity
//!
//! O(m log m) for the sort, near-linear for the union-find scan.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and the
//! traveling salesman problem", *Proc. AMS* 7(1), 48-50.

use crate::models::Edge;

use super::UnionFind;

/// Computes a minimum spanning tree over `vertex_count` vertices.
///
/// Returns `vertex_count − 1` edges when the edges connect every vertex, and
/// fewer otherwise (a spanning forest). Unreachable edges take part with
/// infinite weight, so they are only chosen when nothing finite joins two
/// components. Returns no edges when `vertex_count < 2`.
///
/// # Examples
///
/// ```
/// use city_route::distance::DistanceMatrix;
/// use city_route::graph::{build_complete_graph, kruskal};
/// use city_route::models::total_weight;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 1.0, 10.0],
///     vec![10.0, 0.0, 10.0, 1.0],
///     vec![1.0, 10.0, 0.0, 10.0],
///     vec![10.0, 1.0, 10.0, 0.0],
/// ]).unwrap();
/// let edges = build_complete_graph(4, &dm).unwrap();
/// let mst = kruskal(4, &edges);
/// assert_eq!(mst.len(), 3);
/// assert_eq!(total_weight(&mst), 12.0);
/// ```
pub fn kruskal(vertex_count: usize, edges: &[Edge]) -> Vec<Edge> {
    if vertex_count < 2 {
        return Vec::new();
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let target = vertex_count - 1;
    let mut uf = UnionFind::new(vertex_count);
    let mut tree = Vec::with_capacity(target);

    for edge in sorted {
        if edge.u >= vertex_count || edge.v >= vertex_count {
            log::warn!(
                "Skipping edge ({}, {}) outside {} vertices",
                edge.u,
                edge.v,
                vertex_count
            );
            continue;
        }
        if uf.union(edge.u, edge.v) {
            tree.push(edge);
            if tree.len() == target {
                break;
            }
        }
    }

    log::debug!(
        "Kruskal selected {} of {} edges for {} vertices",
        tree.len(),
        edges.len(),
        vertex_count
    );
    tree
}

/// Returns `true` if `tree` has exactly `vertex_count − 1` in-range edges
/// with no cycle, i.e. it spans every vertex.
pub fn is_spanning_tree(vertex_count: usize, tree: &[Edge]) -> bool {
    if vertex_count == 0 {
        return tree.is_empty();
    }
    if tree.len() != vertex_count - 1 {
        return false;
    }
    let mut uf = UnionFind::new(vertex_count);
    tree.iter()
        .all(|e| e.u < vertex_count && e.v < vertex_count && uf.union(e.u, e.v))
}
