//! Named-location planning and display-ready reports.
//!
//! Ties the pieces together for callers that work with place names rather
//! than indices: checks the location list, obtains distances (with the
//! great-circle fallback), runs the MST or TSP engine, and maps the resulting
//! edges back to names.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::{compute_distance_matrix, DistanceMatrix, DistanceProvider};
use crate::error::{Result, RouteError};
use crate::graph::{build_complete_graph, kruskal};
use crate::models::{Coordinate, Edge, Location};
use crate::tsp::solve_tsp;

/// One leg of a report: names and distance in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Display-ready result of an MST or tour computation.
///
/// # Examples
///
/// ```
/// use city_route::planner::{PathRecord, RouteReport};
///
/// let report = RouteReport::new(vec![PathRecord {
///     from: "A".into(),
///     to: "B".into(),
///     distance: 1234.0,
/// }]);
/// assert_eq!(report.total_distance, 1234.0);
/// assert!((report.total_distance_km() - 1.234).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    pub paths: Vec<PathRecord>,
    pub total_distance: f64,
}

impl RouteReport {
    pub fn new(paths: Vec<PathRecord>) -> Self {
        let total_distance = paths.iter().map(|p| p.distance).sum();
        Self {
            paths,
            total_distance,
        }
    }

    /// Maps index edges to location names.
    ///
    /// # Panics
    ///
    /// Panics if an edge endpoint is out of bounds for `locations`.
    pub(crate) fn from_edges(edges: &[Edge], locations: &[Location]) -> Self {
        let paths = edges
            .iter()
            .map(|e| PathRecord {
                from: locations[e.u].name().to_string(),
                to: locations[e.v].name().to_string(),
                distance: e.weight,
            })
            .collect();
        Self::new(paths)
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance / 1000.0
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24} {:<24} {:>14}", "From", "To", "Distance (km)")?;
        for path in &self.paths {
            writeln!(
                f,
                "{:<24} {:<24} {:>14.2}",
                path.from,
                path.to,
                path.distance / 1000.0
            )?;
        }
        write!(f, "Total Distance: {:.2} km", self.total_distance_km())
    }
}

/// Bounds on how many locations one request may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationPolicy {
    pub min: usize,
    pub max: usize,
}

impl Default for LocationPolicy {
    fn default() -> Self {
        Self { min: 3, max: 10 }
    }
}

impl LocationPolicy {
    /// Checks count bounds, name uniqueness and that every location has a
    /// coordinate. Returns the coordinates in input order.
    pub fn check(&self, locations: &[Location]) -> Result<Vec<Coordinate>> {
        if locations.len() < self.min {
            return Err(RouteError::TooFewLocations {
                min: self.min,
                got: locations.len(),
            });
        }
        if locations.len() > self.max {
            return Err(RouteError::TooManyLocations {
                max: self.max,
                got: locations.len(),
            });
        }

        let mut seen = HashSet::new();
        for loc in locations {
            if !seen.insert(loc.name()) {
                return Err(RouteError::DuplicateLocation(loc.name().to_string()));
            }
        }

        locations
            .iter()
            .map(|loc| {
                loc.coordinate()
                    .ok_or_else(|| RouteError::MissingCoordinate(loc.name().to_string()))
            })
            .collect()
    }
}

/// Plans spanning trees and tours over named locations.
///
/// # Examples
///
/// ```
/// use city_route::distance::HaversineProvider;
/// use city_route::models::Location;
/// use city_route::planner::RoutePlanner;
///
/// let planner = RoutePlanner::new(HaversineProvider);
/// let cities = vec![
///     Location::at("Paris", 48.8566, 2.3522),
///     Location::at("London", 51.5074, -0.1278),
///     Location::at("Brussels", 50.8503, 4.3517),
/// ];
/// let mst = planner.plan_mst(&cities).unwrap();
/// assert_eq!(mst.paths.len(), 2);
///
/// let tour = planner.plan_tour(&cities, Some("London")).unwrap();
/// assert_eq!(tour.paths.len(), 3);
/// assert_eq!(tour.paths[0].from, "London");
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner<P> {
    provider: P,
    policy: LocationPolicy,
}

impl<P: DistanceProvider> RoutePlanner<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            policy: LocationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Distances between the locations, falling back to great-circle
    /// distances if the provider fails.
    pub fn distances(&self, locations: &[Location]) -> Result<DistanceMatrix> {
        let coords = self.policy.check(locations)?;
        Ok(compute_distance_matrix(&self.provider, &coords))
    }

    /// Minimum spanning tree over the locations.
    ///
    /// A tree with fewer than `n − 1` legs is returned as-is when the
    /// provider reports pairs as unreachable and no alternative joins them.
    pub fn plan_mst(&self, locations: &[Location]) -> Result<RouteReport> {
        let distances = self.distances(locations)?;
        let edges = build_complete_graph(locations.len(), &distances)?;
        let reachable: Vec<Edge> = edges.into_iter().filter(Edge::is_reachable).collect();
        let tree = kruskal(locations.len(), &reachable);
        if tree.len() + 1 < locations.len() {
            log::warn!(
                "Spanning tree covers only {} of {} required legs",
                tree.len(),
                locations.len() - 1
            );
        }
        Ok(RouteReport::from_edges(&tree, locations))
    }

    /// Closed tour over the locations, starting at `start` (by name) or at
    /// the first location.
    pub fn plan_tour(&self, locations: &[Location], start: Option<&str>) -> Result<RouteReport> {
        let distances = self.distances(locations)?;
        let start_index = match start {
            Some(name) => locations
                .iter()
                .position(|l| l.name() == name)
                .ok_or_else(|| RouteError::StartNotFound(name.to_string()))?,
            None => 0,
        };
        let tour = solve_tsp(locations.len(), &distances, start_index)?;
        Ok(RouteReport::from_edges(tour.edges(), locations))
    }
}
