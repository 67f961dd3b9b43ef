//! OSRM HTTP adapter for distance matrices and route geometry.

use std::env;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::UpstreamError;
use crate::location::Location;
use crate::matrix::{DistanceMatrix, MatrixSource};
use crate::polyline::Polyline;
use crate::route::RouteSummary;
use crate::traits::{HttpTransport, RoadNetwork};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OsrmConfig {
    /// Defaults overridden by `OSRM_BASE_URL`, `OSRM_PROFILE` and
    /// `OSRM_TIMEOUT_SECS`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var("OSRM_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(profile) = env::var("OSRM_PROFILE") {
            config.profile = profile;
        }
        if let Some(timeout) = env::var("OSRM_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
        {
            config.timeout_secs = timeout;
        }
        config
    }
}

impl HttpTransport for reqwest::blocking::Client {
    fn get(&self, url: &str) -> Result<String, UpstreamError> {
        let body = reqwest::blocking::Client::get(self, url).send()?.text()?;
        Ok(body)
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient<T = reqwest::blocking::Client> {
    config: OsrmConfig,
    transport: T,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self::with_transport(config, client))
    }
}

impl<T: HttpTransport> OsrmClient<T> {
    pub fn with_transport(config: OsrmConfig, transport: T) -> Self {
        Self { config, transport }
    }

    fn url(&self, service: &str, locations: &[Location], query: &str) -> String {
        let coords = locations
            .iter()
            .map(Location::lng_lat)
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/{}/v1/{}/{}?{}",
            self.config.base_url.trim_end_matches('/'),
            service,
            self.config.profile,
            coords,
            query
        )
    }

    fn fetch<R: DeserializeOwned>(&self, url: &str, points: usize) -> Result<R, UpstreamError> {
        debug!(%url, points, "requesting router");
        let body = self.transport.get(url)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl<T: HttpTransport> RoadNetwork for OsrmClient<T> {
    fn table(&self, locations: &[Location]) -> Result<DistanceMatrix, UpstreamError> {
        if locations.is_empty() {
            return Ok(DistanceMatrix::new(Vec::new(), Vec::new(), MatrixSource::RoadNetwork));
        }

        let url = self.url("table", locations, "annotations=distance,duration");
        let body: OsrmTableResponse = self.fetch(&url, locations.len())?;
        check_code(&body.code)?;

        let n = locations.len();
        let distances = into_grid(body.distances, n, "distances")?;
        let durations = into_grid(body.durations, n, "durations")?;

        Ok(DistanceMatrix::new(distances, durations, MatrixSource::RoadNetwork))
    }

    fn route(&self, locations: &[Location]) -> Result<RouteSummary, UpstreamError> {
        let url = self.url("route", locations, "overview=full&geometries=polyline");
        let body: OsrmRouteResponse = self.fetch(&url, locations.len())?;
        check_code(&body.code)?;

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::Malformed("no routes returned".to_string()))?;
        let geometry = Polyline::decode(&route.geometry)
            .map_err(|err| UpstreamError::Malformed(err.to_string()))?;

        Ok(RouteSummary {
            distance: route.distance,
            duration: route.duration,
            geometry,
            source: MatrixSource::RoadNetwork,
        })
    }
}

fn check_code(code: &str) -> Result<(), UpstreamError> {
    if code == "Ok" {
        Ok(())
    } else {
        Err(UpstreamError::Status(code.to_string()))
    }
}

/// Unroutable pairs come back as `null`; any such cell rejects the table.
fn into_grid(
    rows: Option<Vec<Vec<Option<f64>>>>,
    n: usize,
    name: &str,
) -> Result<Vec<Vec<f64>>, UpstreamError> {
    let rows = rows.ok_or_else(|| UpstreamError::Malformed(format!("missing {name}")))?;
    if rows.len() != n || rows.iter().any(|row| row.len() != n) {
        return Err(UpstreamError::Malformed(format!("{name} is not {n}x{n}")));
    }

    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
                    _ => Err(UpstreamError::Malformed(format!("unroutable cell in {name}"))),
                })
                .collect()
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct OsrmTableResponse {
    code: String,
    distances: Option<Vec<Vec<Option<f64>>>>,
    durations: Option<Vec<Vec<Option<f64>>>>,
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: String,
}
