//! Ports between the engine and its data sources.
//!
//! The solver and assembler only ever see a `DistanceMatrix`; where it came
//! from is decided by whichever provider the caller injects.

use crate::error::UpstreamError;
use crate::location::Location;
use crate::matrix::DistanceMatrix;
use crate::route::RouteSummary;

/// Provides a distance/duration matrix for a set of locations.
///
/// The matrix is indexed by the provided location order. Implementations
/// must always return an N×N matrix for N locations.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Location]) -> DistanceMatrix;
}

/// Provides a drawable route through locations in the given order.
pub trait RouteGeometryProvider {
    fn route_for(&self, locations: &[Location]) -> RouteSummary;
}

/// A live road-network service. May fail at any time.
pub trait RoadNetwork {
    fn table(&self, locations: &[Location]) -> Result<DistanceMatrix, UpstreamError>;

    fn route(&self, locations: &[Location]) -> Result<RouteSummary, UpstreamError>;
}

/// Minimal HTTP capability used by the road-network adapter.
///
/// Returns the response body whatever the HTTP status; the router encodes
/// its own failures in the payload.
pub trait HttpTransport {
    fn get(&self, url: &str) -> Result<String, UpstreamError>;
}

impl<T: DistanceMatrixProvider + ?Sized> DistanceMatrixProvider for &T {
    fn matrix_for(&self, locations: &[Location]) -> DistanceMatrix {
        (**self).matrix_for(locations)
    }
}

impl<T: RouteGeometryProvider + ?Sized> RouteGeometryProvider for &T {
    fn route_for(&self, locations: &[Location]) -> RouteSummary {
        (**self).route_for(locations)
    }
}

impl<T: RoadNetwork + ?Sized> RoadNetwork for &T {
    fn table(&self, locations: &[Location]) -> Result<DistanceMatrix, UpstreamError> {
        (**self).table(locations)
    }

    fn route(&self, locations: &[Location]) -> Result<RouteSummary, UpstreamError> {
        (**self).route(locations)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str) -> Result<String, UpstreamError> {
        (**self).get(url)
    }
}
