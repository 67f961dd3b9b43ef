//! Haversine distance matrix provider (fallback when the router is unavailable).
//!
//! Uses great-circle distance to estimate travel time.
//! Less accurate than a road network (ignores roads) but always available.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::location::Location;
use crate::matrix::{DistanceMatrix, MatrixSource};
use crate::polyline::Polyline;
use crate::route::RouteSummary;
use crate::traits::{DistanceMatrixProvider, RouteGeometryProvider};

/// Average urban driving speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Haversine-based distance matrix provider.
///
/// Estimates travel time using straight-line distance and an assumed speed.
/// Never fails, so it backs every road-network call.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineMatrix {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Convert distance in meters to travel time in seconds.
    pub fn meters_to_seconds(&self, meters: f64) -> f64 {
        (meters / 1000.0 / self.speed_kmh) * 3600.0
    }

    fn leg_meters(from: &Location, to: &Location) -> f64 {
        haversine_km(from.coords(), to.coords()) * 1000.0
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Location]) -> DistanceMatrix {
        let n = locations.len();

        // Each pair is evaluated in ascending index order so [i][j] and [j][i]
        // are bit-identical.
        let distances: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (0..n)
                    .map(|j| match i.cmp(&j) {
                        Ordering::Equal => 0.0,
                        Ordering::Less => Self::leg_meters(&locations[i], &locations[j]),
                        Ordering::Greater => Self::leg_meters(&locations[j], &locations[i]),
                    })
                    .collect()
            })
            .collect();

        let durations = distances
            .iter()
            .map(|row| row.iter().map(|&meters| self.meters_to_seconds(meters)).collect())
            .collect();

        DistanceMatrix::new(distances, durations, MatrixSource::Estimated)
    }
}

impl RouteGeometryProvider for HaversineMatrix {
    fn route_for(&self, locations: &[Location]) -> RouteSummary {
        let distance: f64 = locations
            .windows(2)
            .map(|pair| Self::leg_meters(&pair[0], &pair[1]))
            .sum();

        RouteSummary {
            distance,
            duration: self.meters_to_seconds(distance),
            geometry: Polyline::new(locations.iter().map(Location::coords).collect()),
            source: MatrixSource::Estimated,
        }
    }
}
