//! Points the engine routes between.

use serde::{Deserialize, Serialize};

/// A stop, or the synthetic start/end point (home, office).
///
/// Identity is by `id`; coordinates are WGS84 degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Location {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Coordinates as (lat, lng).
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Router coordinate pair, longitude first.
    pub(crate) fn lng_lat(&self) -> String {
        format!("{:.6},{:.6}", self.longitude, self.latitude)
    }
}
