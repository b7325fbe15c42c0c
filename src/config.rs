//! Routing and geocoding service configuration.

use std::env;
use std::time::Duration;

/// Default OpenRouteService matrix endpoint (driving profile).
pub const DEFAULT_MATRIX_URL: &str = "https://api.openrouteservice.org/v2/matrix/driving-car";

/// Default Nominatim base URL.
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim rejects requests without an identifying user agent.
pub const DEFAULT_USER_AGENT: &str = "CityMSTCalculator/1.0";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints and credentials for the network-backed providers.
///
/// # Examples
///
/// ```
/// use city_route::config::ServiceConfig;
///
/// let config = ServiceConfig::default().with_api_key("secret");
/// assert_eq!(config.api_key(), Some("secret"));
/// assert!(config.matrix_url().ends_with("driving-car"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    api_key: Option<String>,
    matrix_url: String,
    geocode_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            matrix_url: DEFAULT_MATRIX_URL.to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first when one exists.
    ///
    /// Recognised variables: `ORS_API_KEY`, `ORS_MATRIX_URL`,
    /// `NOMINATIM_URL`, `ROUTE_USER_AGENT`, `ROUTE_TIMEOUT_SECS`. Unset or
    /// unparsable values keep their defaults.
    pub fn from_env() -> Self {
        if dotenv::dotenv().is_err() {
            log::debug!("No .env file loaded, using process environment only");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        config.api_key = lookup("ORS_API_KEY").filter(|k| !k.trim().is_empty());
        if let Some(url) = lookup("ORS_MATRIX_URL") {
            config.matrix_url = url;
        }
        if let Some(url) = lookup("NOMINATIM_URL") {
            config.geocode_url = url;
        }
        if let Some(agent) = lookup("ROUTE_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(raw) = lookup("ROUTE_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => log::warn!("Ignoring invalid ROUTE_TIMEOUT_SECS value '{raw}'"),
            }
        }
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_matrix_url(mut self, url: impl Into<String>) -> Self {
        self.matrix_url = url.into();
        self
    }

    pub fn with_geocode_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Routing service API key, if configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn matrix_url(&self) -> &str {
        &self.matrix_url
    }

    pub fn geocode_url(&self) -> &str {
        &self.geocode_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert!(config.api_key().is_none());
        assert_eq!(config.matrix_url(), DEFAULT_MATRIX_URL);
        assert_eq!(config.geocode_url(), DEFAULT_GEOCODE_URL);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("ORS_API_KEY", "abc"),
            ("ORS_MATRIX_URL", "http://localhost:8080/matrix"),
            ("NOMINATIM_URL", "http://localhost:7070"),
            ("ROUTE_USER_AGENT", "tester/0.1"),
            ("ROUTE_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.matrix_url(), "http://localhost:8080/matrix");
        assert_eq!(config.geocode_url(), "http://localhost:7070");
        assert_eq!(config.user_agent(), "tester/0.1");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_blank_key_and_bad_timeout_ignored() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("ORS_API_KEY", "  "),
            ("ROUTE_TIMEOUT_SECS", "soon"),
        ]));
        assert!(config.api_key().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
