//! Catalog loading error types.

use std::path::PathBuf;

use crate::domain::AirportCode;

/// Errors raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading the catalog file failed
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON was malformed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two airports share a code
    #[error("duplicate airport code {0}")]
    DuplicateAirport(AirportCode),

    /// A route refers to an airport that isn't in the catalog
    #[error("route {from}->{to} refers to unknown airport {missing}")]
    UnknownAirport {
        from: AirportCode,
        to: AirportCode,
        missing: AirportCode,
    },

    /// Two routes connect the same pair of airports
    #[error("duplicate route {0}->{1}")]
    DuplicateRoute(AirportCode, AirportCode),

    /// A route's duration is negative or not a number
    #[error("route {from}->{to} has invalid duration {duration}")]
    InvalidDuration {
        from: AirportCode,
        to: AirportCode,
        duration: f64,
    },

    /// A route departs and arrives at the same airport
    #[error("route {0}->{0} is a self loop")]
    SelfLoop(AirportCode),
}
