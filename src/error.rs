//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Failures surfaced by the graph engines, distance providers and planner.
#[derive(Error, Debug)]
pub enum RouteError {
    /// A tour was requested over zero locations.
    #[error("Empty input: at least one location is required")]
    EmptyInput,
    /// Two locations adjacent in a computed tour have no finite distance.
    #[error("No finite distance between locations {from} and {to}")]
    UnreachablePair {
        /// Lower index of the pair.
        from: usize,
        /// Higher index of the pair.
        to: usize,
    },
    /// Distance matrix is non-square, the wrong size, or has invalid entries.
    #[error("Malformed distance matrix: {0}")]
    MalformedMatrix(String),
    /// The requested start vertex is outside the matrix.
    #[error("Start index {start} is out of range for {size} locations")]
    InvalidStart {
        /// Requested start index.
        start: usize,
        /// Number of locations.
        size: usize,
    },
    #[error("At least {min} locations are required, got {got}")]
    TooFewLocations { min: usize, got: usize },
    #[error("At most {max} locations are allowed, got {got}")]
    TooManyLocations { max: usize, got: usize },
    #[error("Location '{0}' appears more than once")]
    DuplicateLocation(String),
    #[error("Location '{0}' has no coordinate")]
    MissingCoordinate(String),
    #[error("Start location '{0}' is not in the location list")]
    StartNotFound(String),
    #[error("No coordinate found for '{0}'")]
    LocationNotFound(String),
    /// Routing or geocoding service failure (transport, status, or payload).
    #[error("Service Error: {0}")]
    Service(String),
    #[error("JSON Deserialization Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
