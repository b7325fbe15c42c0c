//! Domain model types for spanning-tree and tour computations.
//!
//! Provides named locations with geographic coordinates, weighted edges
//! between location indices, and the closed-tour result produced by the TSP
//! engine.

mod edge;
mod location;
mod tour;

pub use edge::{total_weight, Edge};
pub use location::{Coordinate, Location};
pub use tour::TspTour;
