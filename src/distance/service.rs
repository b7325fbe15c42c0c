//! Road-network distances from an OpenRouteService-compatible matrix API.
//!
//! Request shape: `{"locations": [[lng, lat], ...], "metrics": ["distance"],
//! "units": "m"}`. The response carries a `distances` grid in meters where
//! `null` marks a pair with no route.

use serde::{Deserialize, Serialize};

use super::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::models::Coordinate;

#[derive(Debug, Serialize)]
#[cfg_attr(not(feature = "network"), allow(dead_code))]
pub(crate) struct MatrixRequest {
    locations: Vec<[f64; 2]>,
    metrics: [&'static str; 1],
    units: &'static str,
}

#[cfg_attr(not(feature = "network"), allow(dead_code))]
impl MatrixRequest {
    pub(crate) fn new(coords: &[Coordinate]) -> Self {
        Self {
            locations: coords.iter().map(Coordinate::lng_lat).collect(),
            metrics: ["distance"],
            units: "m",
        }
    }
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    distances: Option<Vec<Vec<Option<f64>>>>,
}

/// Parses a matrix service response body into a [`DistanceMatrix`].
///
/// `null` entries become [`DistanceMatrix::UNREACHABLE`]. Fails with
/// [`RouteError::Service`] when the `distances` field is missing, and with
/// [`RouteError::MalformedMatrix`] when the grid is not `expected`×`expected`
/// or holds invalid values.
///
/// # Examples
///
/// ```
/// use city_route::distance::parse_matrix_response;
///
/// let body = r#"{"distances": [[0.0, 1200.5], [1180.0, 0.0]]}"#;
/// let dm = parse_matrix_response(body, 2).unwrap();
/// assert_eq!(dm.get(0, 1), 1200.5);
/// ```
pub fn parse_matrix_response(body: &str, expected: usize) -> Result<DistanceMatrix> {
    let response: MatrixResponse = serde_json::from_str(body)?;
    let rows = response
        .distances
        .ok_or_else(|| RouteError::Service("No distances returned".to_string()))?;

    let rows: Vec<Vec<f64>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|d| d.unwrap_or(DistanceMatrix::UNREACHABLE))
                .collect()
        })
        .collect();

    let dm = DistanceMatrix::from_rows(rows)?;
    if dm.size() != expected {
        return Err(RouteError::MalformedMatrix(format!(
            "service returned {} locations, expected {expected}",
            dm.size()
        )));
    }
    dm.validate()?;
    Ok(dm)
}

#[cfg(feature = "network")]
pub use client::RoutingService;

#[cfg(feature = "network")]
mod client {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::distance::DistanceProvider;

    /// Blocking client for the routing service's matrix endpoint.
    ///
    /// Performs a single batched request for all pairs. No retries.
    #[derive(Debug, Clone)]
    pub struct RoutingService {
        client: reqwest::blocking::Client,
        url: String,
        api_key: String,
    }

    impl RoutingService {
        /// Builds a client from configuration. Fails if no API key is set.
        pub fn new(config: &ServiceConfig) -> Result<Self> {
            let api_key = config
                .api_key()
                .ok_or_else(|| RouteError::Service("ORS_API_KEY is not set".to_string()))?
                .to_string();
            let client = reqwest::blocking::Client::builder()
                .timeout(config.timeout())
                .user_agent(config.user_agent())
                .build()
                .map_err(|e| RouteError::Service(e.to_string()))?;
            Ok(Self {
                client,
                url: config.matrix_url().to_string(),
                api_key,
            })
        }
    }

    impl DistanceProvider for RoutingService {
        fn distance_matrix(&self, coords: &[Coordinate]) -> Result<DistanceMatrix> {
            log::debug!("Requesting road distances for {} locations", coords.len());
            let response = self
                .client
                .post(&self.url)
                .header("Authorization", &self.api_key)
                .json(&MatrixRequest::new(coords))
                .send()
                .map_err(|e| RouteError::Service(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(RouteError::Service(format!(
                    "matrix request failed with status {status}"
                )));
            }

            let body = response
                .text()
                .map_err(|e| RouteError::Service(e.to_string()))?;
            parse_matrix_response(&body, coords.len())
        }
    }
}
