//! Location and coordinate types.

use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// # Examples
///
/// ```
/// use city_route::models::Coordinate;
///
/// let tokyo = Coordinate::new(35.6762, 139.6503);
/// assert_eq!(tokyo.lat(), 35.6762);
/// assert_eq!(tokyo.lng(), 139.6503);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// `[lng, lat]`, the axis order routing services expect.
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// A named place, optionally pinned to a coordinate.
///
/// The name is the identity of a location: names within one computation must
/// be unique.
///
/// # Examples
///
/// ```
/// use city_route::models::{Coordinate, Location};
///
/// let loc = Location::new("Delhi").with_coordinate(Coordinate::new(28.61, 77.21));
/// assert_eq!(loc.name(), "Delhi");
/// assert!(loc.coordinate().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    coordinate: Option<Coordinate>,
}

impl Location {
    /// Creates a location without a coordinate.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinate: None,
        }
    }

    /// Creates a location at the given latitude/longitude.
    pub fn at(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self::new(name).with_coordinate(Coordinate::new(lat, lng))
    }

    /// Pins this location to a coordinate.
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}
