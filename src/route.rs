//! Final route results.

use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::matrix::{DistanceMatrix, MatrixSource};
use crate::polyline::Polyline;

/// One directed hop between consecutive stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from: Location,
    pub to: Location,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub ordered_locations: Vec<Location>,
    pub total_distance: f64,
    pub total_duration: f64,
    pub legs: Vec<RouteLeg>,
    pub matrix_source: MatrixSource,
}

impl RouteResult {
    /// Location ids in visiting order.
    pub fn ids(&self) -> Vec<&str> {
        self.ordered_locations.iter().map(|location| location.id.as_str()).collect()
    }
}

/// A drawable route through a fixed sequence of locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance: f64,
    pub duration: f64,
    pub geometry: Polyline,
    pub source: MatrixSource,
}

/// Builds the result for `order` using the same matrix the solver saw.
///
/// # Panics
///
/// If an index in `order` is outside `locations` or `matrix`.
pub fn assemble(locations: &[Location], order: &[usize], matrix: &DistanceMatrix) -> RouteResult {
    let legs: Vec<RouteLeg> = order
        .windows(2)
        .map(|pair| RouteLeg {
            from: locations[pair[0]].clone(),
            to: locations[pair[1]].clone(),
            distance: matrix.distance(pair[0], pair[1]),
            duration: matrix.duration(pair[0], pair[1]),
        })
        .collect();

    RouteResult {
        ordered_locations: order.iter().map(|&i| locations[i].clone()).collect(),
        total_distance: matrix.path_distance(order),
        total_duration: matrix.path_duration(order),
        legs,
        matrix_source: matrix.source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Location>, DistanceMatrix) {
        let locations = vec![
            Location::new("home", 0.0, 0.0),
            Location::new("a", 0.0, 1.0),
            Location::new("office", 0.0, 2.0),
        ];
        let matrix = DistanceMatrix::new(
            vec![
                vec![0.0, 100.0, 300.0],
                vec![100.0, 0.0, 150.0],
                vec![300.0, 160.0, 0.0],
            ],
            vec![
                vec![0.0, 10.0, 30.0],
                vec![10.0, 0.0, 15.0],
                vec![30.0, 16.0, 0.0],
            ],
            MatrixSource::RoadNetwork,
        );
        (locations, matrix)
    }

    #[test]
    fn test_assemble_maps_order_to_legs() {
        let (locations, matrix) = fixture();
        let result = assemble(&locations, &[0, 1, 2], &matrix);

        assert_eq!(result.ids(), vec!["home", "a", "office"]);
        assert_eq!(result.legs.len(), 2);
        assert_eq!(result.legs[1].from.id, "a");
        assert_eq!(result.legs[1].to.id, "office");
        assert_eq!(result.legs[1].distance, 150.0);
        assert_eq!(result.total_distance, 250.0);
        assert_eq!(result.total_duration, 25.0);
        assert_eq!(result.matrix_source, MatrixSource::RoadNetwork);
    }

    #[test]
    fn test_assemble_uses_directed_cells() {
        let (locations, matrix) = fixture();
        let result = assemble(&locations, &[0, 2, 1], &matrix);
        assert_eq!(result.total_distance, 460.0);
    }

    #[test]
    fn test_result_json_is_camel_case() {
        let (locations, matrix) = fixture();
        let json = serde_json::to_value(assemble(&locations, &[0, 1], &matrix)).unwrap();

        assert!(json.get("orderedLocations").is_some());
        assert_eq!(json["totalDistance"], 100.0);
        assert_eq!(json["matrixSource"], "road_network");
        assert_eq!(json["legs"].as_array().map(Vec::len), Some(1));
    }
}
