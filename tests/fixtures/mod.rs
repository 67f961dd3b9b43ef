//! Test fixtures for route-optimizer.
//!
//! Provides real Cairo coordinates and small matrix builders.

pub mod cairo_locations;

pub use cairo_locations::*;

use route_optimizer::{DistanceMatrix, MatrixSource};

/// Road-network matrix with durations equal to distances / 10.
#[allow(dead_code)]
pub fn road_matrix(distances: Vec<Vec<f64>>) -> DistanceMatrix {
    let durations = distances
        .iter()
        .map(|row| row.iter().map(|d| d / 10.0).collect())
        .collect();
    DistanceMatrix::new(distances, durations, MatrixSource::RoadNetwork)
}
