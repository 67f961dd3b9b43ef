//! Composite adapter: road network first, estimate on any failure.

use tracing::warn;

use crate::haversine::HaversineMatrix;
use crate::location::Location;
use crate::matrix::DistanceMatrix;
use crate::route::RouteSummary;
use crate::traits::{DistanceMatrixProvider, RoadNetwork, RouteGeometryProvider};

/// Tries `primary` once and answers from `fallback` when it fails.
///
/// Never surfaces an upstream error. No retries, no caching.
#[derive(Debug, Clone)]
pub struct WithFallback<N, F = HaversineMatrix> {
    primary: N,
    fallback: F,
}

impl<N: RoadNetwork> WithFallback<N> {
    pub fn new(primary: N) -> Self {
        Self::with_fallback(primary, HaversineMatrix::default())
    }
}

impl<N, F> WithFallback<N, F> {
    pub fn with_fallback(primary: N, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &N {
        &self.primary
    }
}

impl<N, F> DistanceMatrixProvider for WithFallback<N, F>
where
    N: RoadNetwork,
    F: DistanceMatrixProvider,
{
    fn matrix_for(&self, locations: &[Location]) -> DistanceMatrix {
        match self.primary.table(locations) {
            Ok(matrix) if matrix.is_square(locations.len()) => matrix,
            Ok(matrix) => {
                warn!(
                    expected = locations.len(),
                    rows = matrix.len(),
                    "road-network matrix has the wrong shape, using estimate"
                );
                self.fallback.matrix_for(locations)
            }
            Err(err) => {
                warn!(error = %err, points = locations.len(), "road-network matrix unavailable, using estimate");
                self.fallback.matrix_for(locations)
            }
        }
    }
}

impl<N, F> RouteGeometryProvider for WithFallback<N, F>
where
    N: RoadNetwork,
    F: RouteGeometryProvider,
{
    fn route_for(&self, locations: &[Location]) -> RouteSummary {
        if locations.len() < 2 {
            return self.fallback.route_for(locations);
        }

        match self.primary.route(locations) {
            Ok(summary) => summary,
            Err(err) => {
                warn!(error = %err, points = locations.len(), "road-network route unavailable, using estimate");
                self.fallback.route_for(locations)
            }
        }
    }
}
