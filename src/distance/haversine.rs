//! Great-circle distances.

use super::DistanceMatrix;
use crate::models::Coordinate;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates in meters (haversine).
///
/// # Examples
///
/// ```
/// use city_route::distance::haversine;
/// use city_route::models::Coordinate;
///
/// let p = Coordinate::new(51.5, -0.12);
/// assert_eq!(haversine(p, p), 0.0);
/// ```
pub fn haversine(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_lng = (to.lng() - from.lng()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

impl DistanceMatrix {
    /// Builds a symmetric great-circle matrix. Never contains unreachable
    /// entries.
    pub fn from_coordinates(coords: &[Coordinate]) -> Self {
        let n = coords.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                dm.set_symmetric(i, j, haversine(coords[i], coords[j]));
            }
        }
        dm
    }
}
