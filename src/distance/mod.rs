//! Distance matrices and how to obtain them.
//!
//! Provides a dense distance matrix, great-circle distances, and providers
//! that query a road-network service with a haversine fallback.

mod haversine;
mod matrix;
mod provider;
mod service;

pub use haversine::{haversine, EARTH_RADIUS_M};
pub use matrix::DistanceMatrix;
pub use provider::{
    compute_distance_matrix, DistanceProvider, FallbackProvider, HaversineProvider, StaticProvider,
};
#[cfg(feature = "network")]
pub use service::RoutingService;
pub use service::parse_matrix_response;
