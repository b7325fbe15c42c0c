//! Weighted edge type.

use serde::{Deserialize, Serialize};

/// A weighted connection between two location indices.
///
/// Edges from the complete-graph builder are unordered pairs with `u < v`.
/// Tour edges are directed in visiting order, so `u` is the departure and
/// `v` the arrival.
///
/// # Examples
///
/// ```
/// use city_route::models::Edge;
///
/// let e = Edge::new(0, 2, 1500.0);
/// assert!(e.connects(2, 0));
/// assert!(e.is_reachable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Distance in meters; infinite when unreachable.
    pub weight: f64,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Returns `true` if this edge joins `a` and `b` in either direction.
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// Returns `true` if the weight is finite.
    pub fn is_reachable(&self) -> bool {
        self.weight.is_finite()
    }
}

/// Sum of edge weights.
pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_both_directions() {
        let e = Edge::new(1, 3, 2.0);
        assert!(e.connects(1, 3));
        assert!(e.connects(3, 1));
        assert!(!e.connects(1, 2));
    }

    #[test]
    fn test_unreachable() {
        assert!(!Edge::new(0, 1, f64::INFINITY).is_reachable());
    }

    #[test]
    fn test_total_weight() {
        let edges = vec![Edge::new(0, 1, 1.5), Edge::new(1, 2, 2.5)];
        assert!((total_weight(&edges) - 4.0).abs() < 1e-10);
        assert_eq!(total_weight(&[]), 0.0);
    }
}
