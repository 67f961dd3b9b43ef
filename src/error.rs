//! Error types.
//!
//! `RouteError` is the only error a caller of the engine ever sees.
//! `UpstreamError` describes road-network failures; it is absorbed by the
//! fallback adapters and never returned from `optimize`.

use std::fmt;

use thiserror::Error;

/// Which fixed endpoint an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Structural input errors. Fatal to the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("at least 2 locations are required, got {0}")]
    InsufficientLocations(usize),

    #[error("{endpoint} index {index} is out of range for {len} locations")]
    IndexOutOfRange {
        endpoint: Endpoint,
        index: usize,
        len: usize,
    },

    #[error("end index {0} must differ from the start index")]
    EndEqualsStart(usize),

    #[error("distance matrix must be {expected}x{expected}, found a dimension of {found}")]
    MatrixShape { expected: usize, found: usize },
}

/// Road-network failures. Always recovered locally.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("router responded with code {0:?}")]
    Status(String),

    #[error("malformed router response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Malformed(err.to_string())
    }
}
