//! route-optimizer core
//!
//! Orders a field agent's stops between a fixed start and an optional fixed
//! end, using a road-network distance matrix with a haversine fallback.

pub mod error;
pub mod fallback;
pub mod haversine;
pub mod location;
pub mod matrix;
pub mod optimizer;
pub mod osrm;
pub mod polyline;
pub mod route;
pub mod solver;
pub mod traits;

pub use error::{RouteError, UpstreamError};
pub use location::Location;
pub use matrix::{DistanceMatrix, MatrixSource};
pub use optimizer::{optimize, RouteOptimizer};
pub use route::{RouteLeg, RouteResult};
