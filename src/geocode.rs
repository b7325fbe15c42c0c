//! Place-name lookup.
//!
//! Resolves display names to coordinates through a [`Geocoder`]. The
//! Nominatim client is available with the `network` feature; response
//! parsing is always compiled so it can be checked offline.

use serde::Deserialize;

use crate::error::{Result, RouteError};
use crate::models::{Coordinate, Location};

/// Resolves a place name to a coordinate.
pub trait Geocoder {
    /// Returns `Ok(None)` when the service knows no such place.
    fn locate(&self, name: &str) -> Result<Option<Coordinate>>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn locate(&self, name: &str) -> Result<Option<Coordinate>> {
        (**self).locate(name)
    }
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Parses a Nominatim `search?format=json` body, returning the first hit.
///
/// # Examples
///
/// ```
/// use city_route::geocode::parse_search_response;
///
/// let body = r#"[{"lat": "35.6768601", "lon": "139.7638947", "display_name": "Tokyo"}]"#;
/// let c = parse_search_response(body).unwrap().unwrap();
/// assert!((c.lat() - 35.6768601).abs() < 1e-9);
/// assert_eq!(parse_search_response("[]").unwrap(), None);
/// ```
pub fn parse_search_response(body: &str) -> Result<Option<Coordinate>> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };
    let lat = hit
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|e| RouteError::Service(format!("invalid latitude '{}': {e}", hit.lat)))?;
    let lng = hit
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|e| RouteError::Service(format!("invalid longitude '{}': {e}", hit.lon)))?;
    Ok(Some(Coordinate::new(lat, lng)))
}

/// Resolves every name, failing on the first one the geocoder cannot find.
pub fn geocode_all<G: Geocoder>(geocoder: &G, names: &[&str]) -> Result<Vec<Location>> {
    names
        .iter()
        .map(|&name| match geocoder.locate(name)? {
            Some(coordinate) => Ok(Location::new(name).with_coordinate(coordinate)),
            None => Err(RouteError::LocationNotFound(name.to_string())),
        })
        .collect()
}

/// Returns the names that do not resolve. Lookup errors count as unresolved.
pub fn invalid_locations<G: Geocoder>(geocoder: &G, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter(|&&name| match geocoder.locate(name) {
            Ok(found) => found.is_none(),
            Err(e) => {
                log::warn!("Error checking location '{name}': {e}");
                true
            }
        })
        .map(|name| name.to_string())
        .collect()
}

#[cfg(feature = "network")]
pub use client::Nominatim;

#[cfg(feature = "network")]
mod client {
    use super::*;
    use crate::config::ServiceConfig;

    /// Blocking Nominatim search client.
    ///
    /// Nominatim's usage policy allows one request per second; pacing is left
    /// to the caller.
    #[derive(Debug, Clone)]
    pub struct Nominatim {
        client: reqwest::blocking::Client,
        base_url: String,
    }

    impl Nominatim {
        pub fn new(config: &ServiceConfig) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .timeout(config.timeout())
                .user_agent(config.user_agent())
                .build()
                .map_err(|e| RouteError::Service(e.to_string()))?;
            Ok(Self {
                client,
                base_url: config.geocode_url().trim_end_matches('/').to_string(),
            })
        }
    }

    impl Geocoder for Nominatim {
        fn locate(&self, name: &str) -> Result<Option<Coordinate>> {
            let response = self
                .client
                .get(format!("{}/search", self.base_url))
                .query(&[("q", name), ("format", "json"), ("limit", "1")])
                .send()
                .map_err(|e| RouteError::Service(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(RouteError::Service(format!(
                    "geocoding '{name}' failed with status {status}"
                )));
            }

            let body = response
                .text()
                .map_err(|e| RouteError::Service(e.to_string()))?;
            parse_search_response(&body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Gazetteer(HashMap<&'static str, Coordinate>);

    impl Geocoder for Gazetteer {
        fn locate(&self, name: &str) -> Result<Option<Coordinate>> {
            if name == "Offline" {
                return Err(RouteError::Service("timeout".into()));
            }
            Ok(self.0.get(name).copied())
        }
    }

    fn gazetteer() -> Gazetteer {
        Gazetteer(HashMap::from([
            ("Tokyo", Coordinate::new(35.68, 139.76)),
            ("Delhi", Coordinate::new(28.61, 77.21)),
        ]))
    }

    #[test]
    fn test_parse_first_hit() {
        let body = r#"[{"lat": "1.5", "lon": "-2.25"}, {"lat": "9", "lon": "9"}]"#;
        let c = parse_search_response(body).expect("valid").expect("hit");
        assert_eq!(c, Coordinate::new(1.5, -2.25));
    }

    #[test]
    fn test_parse_bad_number() {
        let body = r#"[{"lat": "north", "lon": "0"}]"#;
        assert!(matches!(parse_search_response(body), Err(RouteError::Service(_))));
    }

    #[test]
    fn test_parse_not_a_list() {
        assert!(matches!(parse_search_response("{}"), Err(RouteError::Json(_))));
    }

    #[test]
    fn test_geocode_all() {
        let locations = geocode_all(&gazetteer(), &["Tokyo", "Delhi"]).expect("all found");
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[1].name(), "Delhi");
        assert_eq!(locations[0].coordinate(), Some(Coordinate::new(35.68, 139.76)));
    }

    #[test]
    fn test_geocode_all_missing() {
        let err = geocode_all(&gazetteer(), &["Tokyo", "Atlantis", "Delhi"]);
        assert!(matches!(err, Err(RouteError::LocationNotFound(name)) if name == "Atlantis"));
    }

    #[test_log::test]
    fn test_invalid_locations() {
        let bad = invalid_locations(&gazetteer(), &["Tokyo", "Atlantis", "Offline"]);
        assert_eq!(bad, vec!["Atlantis".to_string(), "Offline".to_string()]);
    }
}
