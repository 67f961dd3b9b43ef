//! Composed entry point: matrix, solve, assemble.

use tracing::debug;

use crate::error::RouteError;
use crate::fallback::WithFallback;
use crate::location::Location;
use crate::osrm::{OsrmClient, OsrmConfig};
use crate::route::{assemble, RouteResult};
use crate::solver::{solve_with, validate_endpoints, SolveOptions};
use crate::traits::DistanceMatrixProvider;

/// Orders `locations` from `start` to `end` (or an open end).
///
/// Input is checked before any matrix is requested. The matrix is fetched
/// once and shared by the solver and the assembler. Road-network failures
/// never surface here; only structural input errors do.
pub fn optimize<P>(
    provider: &P,
    locations: &[Location],
    start: usize,
    end: Option<usize>,
) -> Result<RouteResult, RouteError>
where
    P: DistanceMatrixProvider + ?Sized,
{
    optimize_with(provider, locations, start, end, &SolveOptions::default())
}

pub fn optimize_with<P>(
    provider: &P,
    locations: &[Location],
    start: usize,
    end: Option<usize>,
    options: &SolveOptions,
) -> Result<RouteResult, RouteError>
where
    P: DistanceMatrixProvider + ?Sized,
{
    validate_endpoints(locations.len(), start, end)?;

    let matrix = provider.matrix_for(locations);
    matrix.check_shape(locations.len())?;
    debug!(points = locations.len(), source = ?matrix.source, "distance matrix ready");

    let solution = solve_with(&matrix, start, end, options)?;
    Ok(assemble(locations, &solution.order, &matrix))
}

/// Holds a matrix provider and solver options for repeated calls.
///
/// Stateless between calls; safe to share across threads when the provider is.
#[derive(Debug, Clone)]
pub struct RouteOptimizer<P> {
    provider: P,
    options: SolveOptions,
}

impl RouteOptimizer<WithFallback<OsrmClient>> {
    /// OSRM-backed optimizer with the haversine estimate behind it.
    pub fn osrm(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(WithFallback::new(OsrmClient::new(config)?)))
    }
}

impl<P: DistanceMatrixProvider> RouteOptimizer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            options: SolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn optimize(
        &self,
        locations: &[Location],
        start: usize,
        end: Option<usize>,
    ) -> Result<RouteResult, RouteError> {
        optimize_with(&self.provider, locations, start, end, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::haversine::HaversineMatrix;
    use crate::matrix::{DistanceMatrix, MatrixSource};

    struct CountingProvider {
        calls: Cell<usize>,
        inner: HaversineMatrix,
    }

    impl DistanceMatrixProvider for CountingProvider {
        fn matrix_for(&self, locations: &[Location]) -> DistanceMatrix {
            self.calls.set(self.calls.get() + 1);
            self.inner.matrix_for(locations)
        }
    }

    struct Truncating;

    impl DistanceMatrixProvider for Truncating {
        fn matrix_for(&self, _locations: &[Location]) -> DistanceMatrix {
            DistanceMatrix::new(vec![vec![0.0]], vec![vec![0.0]], MatrixSource::RoadNetwork)
        }
    }

    fn stops() -> Vec<Location> {
        vec![
            Location::new("home", 30.0444, 31.2357),
            Location::new("office", 30.0626, 31.2497),
            Location::new("c-1", 30.0131, 31.2089),
            Location::new("c-2", 30.0500, 31.2400),
        ]
    }

    #[test]
    fn test_fetches_matrix_once() {
        let provider = CountingProvider {
            calls: Cell::new(0),
            inner: HaversineMatrix::default(),
        };
        let result = optimize(&provider, &stops(), 0, Some(1)).unwrap();

        assert_eq!(provider.calls.get(), 1);
        assert_eq!(result.ordered_locations.first().map(|l| l.id.as_str()), Some("home"));
        assert_eq!(result.ordered_locations.last().map(|l| l.id.as_str()), Some("office"));
        assert_eq!(result.legs.len(), 3);
    }

    #[test]
    fn test_bad_input_never_requests_matrix() {
        let provider = CountingProvider {
            calls: Cell::new(0),
            inner: HaversineMatrix::default(),
        };

        assert_eq!(
            optimize(&provider, &stops(), 2, Some(2)),
            Err(RouteError::EndEqualsStart(2))
        );
        assert_eq!(
            optimize(&provider, &stops()[..1], 0, None),
            Err(RouteError::InsufficientLocations(1))
        );
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn test_rejects_provider_with_wrong_shape() {
        assert_eq!(
            optimize(&Truncating, &stops(), 0, None),
            Err(RouteError::MatrixShape { expected: 4, found: 1 })
        );
    }

    #[test]
    fn test_optimizer_carries_options() {
        let optimizer = RouteOptimizer::new(HaversineMatrix::default())
            .with_options(SolveOptions { improvement_passes: 2 });
        let result = optimizer.optimize(&stops(), 0, None).unwrap();

        assert_eq!(result.ordered_locations.len(), 4);
        assert_eq!(result.matrix_source, MatrixSource::Estimated);
    }
}
