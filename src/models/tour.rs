//! Closed tour result type.

use serde::{Deserialize, Serialize};

use super::Edge;

/// An approximate TSP tour: a single closed cycle through every location.
///
/// `order` lists vertices in visiting order starting at the start vertex;
/// `edges` holds the `order.len()` cycle edges including the closing edge
/// back to the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspTour {
    order: Vec<usize>,
    edges: Vec<Edge>,
    total_distance: f64,
    initial_distance: f64,
}

impl TspTour {
    pub(crate) fn new(order: Vec<usize>, edges: Vec<Edge>, initial_distance: f64) -> Self {
        let total_distance = super::total_weight(&edges);
        Self {
            order,
            edges,
            total_distance,
            initial_distance,
        }
    }

    /// Vertices in visiting order (the return to the start is implicit).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cycle edges in visiting order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Length of the closed tour.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Length of the nearest-neighbor tour before 2-opt.
    pub fn initial_distance(&self) -> f64 {
        self.initial_distance
    }

    /// Vertex the tour starts and ends at.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
