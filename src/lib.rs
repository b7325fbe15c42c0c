//! # city-route
//!
//! Minimum spanning trees and approximate TSP tours over small sets of named
//! locations, with road-network distances and a great-circle fallback.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Location, Edge, TspTour)
//! - [`distance`] — Distance matrix, haversine distances, distance providers
//! - [`geocode`] — Place-name to coordinate lookup
//! - [`graph`] — Complete-graph builder, union-find, Kruskal MST
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt tour improvement
//! - [`tsp`] — Nearest neighbor + 2-opt tour with reachability check
//! - [`planner`] — Named-location planning and display-ready reports
//! - [`config`] — Service endpoints and credentials
//!
//! Network clients (`RoutingService`, `Nominatim`) require the `network`
//! feature.

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod geocode;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod planner;
pub mod tsp;

pub use error::{Result, RouteError};
