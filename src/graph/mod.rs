//! Graph construction and minimum spanning trees.
//!
//! - [`build_complete_graph`] — All-pairs edge list from a distance matrix, O(n²)
//! - [`UnionFind`] — Disjoint sets with path compression and union by rank
//! - [`kruskal`] — Kruskal's minimum spanning tree (1956), O(m log m)

mod complete;
mod kruskal;
mod union_find;

pub use complete::build_complete_graph;
pub use kruskal::{is_spanning_tree, kruskal};
pub use union_find::UnionFind;
