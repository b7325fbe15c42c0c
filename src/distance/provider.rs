//! Distance matrix acquisition.
//!
//! A [`DistanceProvider`] turns coordinates into a complete distance matrix.
//! [`HaversineProvider`] always succeeds; network-backed providers may fail
//! and are wrapped in a [`FallbackProvider`] or passed to
//! [`compute_distance_matrix`], which falls back to great-circle distances.

use super::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::models::Coordinate;

/// Source of pairwise distances between coordinates.
pub trait DistanceProvider {
    /// Returns the n×n distance matrix (meters) for `coords`.
    fn distance_matrix(&self, coords: &[Coordinate]) -> Result<DistanceMatrix>;
}

impl<P: DistanceProvider + ?Sized> DistanceProvider for &P {
    fn distance_matrix(&self, coords: &[Coordinate]) -> Result<DistanceMatrix> {
        (**self).distance_matrix(coords)
    }
}

impl<P: DistanceProvider + ?Sized> DistanceProvider for Box<P> {
    fn distance_matrix(&self, coords: &[Coordinate]) -> Result<DistanceMatrix> {
        (**self).distance_matrix(coords)
    }
}

/// Straight-line (great-circle) distances. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineProvider;

impl DistanceProvider for HaversineProvider {
    fn distance_matrix(&self, coords: &[Coordinate]) -> Result<DistanceMatrix> {
        Ok(DistanceMatrix::from_coordinates(coords))
    }
}

/// Fixed matrix, for callers that already hold distances.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    matrix: DistanceMatrix,
}

impl StaticProvider {
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self { matrix }
    }
}

impl DistanceProvider for StaticProvider {
    fn distance_matrix(&self, coords: &[Coordinate]) -> Result<DistanceMatrix> {
        if coords.len() != self.matrix.size() {
            return Err(RouteError::MalformedMatrix(format!(
                "static matrix has {} locations, {} requested",
                self.matrix.size(),
                coords.len()
            )));
        }
        Ok(self.matrix.clone())
    }
}

/// Tries `primary`, and on any failure uses `fallback`.
///
/// # Examples
///
/// ```
/// use city_route::distance::{DistanceProvider, FallbackProvider, HaversineProvider, StaticProvider, DistanceMatrix};
/// use city_route::models::Coordinate;
///
/// // A static matrix of the wrong size always fails, so haversine answers.
/// let provider = FallbackProvider::new(StaticProvider::new(DistanceMatrix::new(5)), HaversineProvider);
/// let coords = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
/// let dm = provider.distance_matrix(&coords).unwrap();
/// assert!(dm.get(0, 1) > 100_000.0);
/// ```
#[derive(Debug, Clone)]
pub struct FallbackProvider<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackProvider<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: DistanceProvider, F: DistanceProvider> DistanceProvider for FallbackProvider<P, F> {
    fn distance_matrix(&self, coords: &[Coordinate]) -> Result<DistanceMatrix> {
        match self.primary.distance_matrix(coords) {
            Ok(dm) => Ok(dm),
            Err(e) => {
                log::warn!("Distance matrix failed, falling back: {e}");
                self.fallback.distance_matrix(coords)
            }
        }
    }
}

/// Returns the primary provider's matrix, or great-circle distances if the
/// primary fails or returns a matrix that does not fit `coords`.
///
/// Always succeeds; an empty coordinate list yields a 0×0 matrix.
pub fn compute_distance_matrix<P: DistanceProvider>(primary: &P, coords: &[Coordinate]) -> DistanceMatrix {
    if coords.is_empty() {
        return DistanceMatrix::new(0);
    }
    let checked = primary.distance_matrix(coords).and_then(|dm| {
        if dm.size() != coords.len() {
            return Err(RouteError::MalformedMatrix(format!(
                "provider returned {} locations, expected {}",
                dm.size(),
                coords.len()
            )));
        }
        dm.validate()?;
        Ok(dm)
    });
    match checked {
        Ok(dm) => dm,
        Err(e) => {
            log::warn!("Distance matrix failed, using straight-line distances: {e}");
            DistanceMatrix::from_coordinates(coords)
        }
    }
}
