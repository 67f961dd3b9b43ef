//! Pairwise distance/duration matrices.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Where a matrix came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixSource {
    /// Returned by the road-network router.
    RoadNetwork,
    /// Great-circle estimate at an assumed speed.
    Estimated,
}

/// N×N distances (meters) and durations (seconds), indexed by the order of
/// the locations they were built from.
///
/// Road-network matrices may be asymmetric; estimated ones never are.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    pub distances: Vec<Vec<f64>>,
    pub durations: Vec<Vec<f64>>,
    pub source: MatrixSource,
}

impl DistanceMatrix {
    pub fn new(distances: Vec<Vec<f64>>, durations: Vec<Vec<f64>>, source: MatrixSource) -> Self {
        Self {
            distances,
            durations,
            source,
        }
    }

    /// Number of points the matrix covers.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from][to]
    }

    pub fn duration(&self, from: usize, to: usize) -> f64 {
        self.durations[from][to]
    }

    /// True when both grids are exactly `n`×`n`.
    pub fn is_square(&self, n: usize) -> bool {
        self.check_shape(n).is_ok()
    }

    /// Fails with the first offending dimension: a grid's row count, else
    /// the length of its first short or long row. Distances are checked first.
    pub fn check_shape(&self, n: usize) -> Result<(), RouteError> {
        for grid in [&self.distances, &self.durations] {
            let found = if grid.len() != n {
                Some(grid.len())
            } else {
                grid.iter().map(Vec::len).find(|&len| len != n)
            };
            if let Some(found) = found {
                return Err(RouteError::MatrixShape { expected: n, found });
            }
        }
        Ok(())
    }

    /// Sum of distances along consecutive pairs of `order`.
    pub fn path_distance(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|pair| self.distance(pair[0], pair[1])).sum()
    }

    /// Sum of durations along consecutive pairs of `order`.
    pub fn path_duration(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|pair| self.duration(pair[0], pair[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::new(
            vec![
                vec![0.0, 10.0, 20.0],
                vec![12.0, 0.0, 5.0],
                vec![20.0, 6.0, 0.0],
            ],
            vec![
                vec![0.0, 1.0, 2.0],
                vec![1.5, 0.0, 0.5],
                vec![2.0, 0.7, 0.0],
            ],
            MatrixSource::RoadNetwork,
        )
    }

    #[test]
    fn test_is_square() {
        let matrix = sample();
        assert!(matrix.is_square(3));
        assert!(!matrix.is_square(2));

        let mut ragged = sample();
        ragged.durations[1].pop();
        assert!(!ragged.is_square(3));
    }

    #[test]
    fn test_check_shape_reports_first_bad_dimension() {
        let mut short_row = sample();
        short_row.distances[1].pop();
        assert_eq!(
            short_row.check_shape(3),
            Err(RouteError::MatrixShape { expected: 3, found: 2 })
        );

        let mut missing_row = sample();
        missing_row.durations.pop();
        assert_eq!(
            missing_row.check_shape(3),
            Err(RouteError::MatrixShape { expected: 3, found: 2 })
        );

        assert_eq!(
            sample().check_shape(4),
            Err(RouteError::MatrixShape { expected: 4, found: 3 })
        );
        assert_eq!(sample().check_shape(3), Ok(()));
    }

    #[test]
    fn test_path_totals_follow_direction() {
        let matrix = sample();
        assert_eq!(matrix.path_distance(&[0, 1, 2]), 15.0);
        assert_eq!(matrix.path_distance(&[2, 1, 0]), 18.0);
        assert!((matrix.path_duration(&[0, 1, 2]) - 1.5).abs() < 1e-9);
        assert_eq!(matrix.path_distance(&[1]), 0.0);
    }
}
