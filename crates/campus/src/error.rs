use thiserror::Error;

use crate::location::LocationId;

/// Failure while loading or decoding the map documents.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("HTTP {status} while fetching {url}")]
    Status { url: String, status: u16 },
    #[error("malformed {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a route request could not be drawn. The `Display` text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Please select both an origin and a destination.")]
    MissingSelection,
    #[error("Origin and destination cannot be the same.")]
    SameEndpoints,
    #[error("No route is defined between those locations.")]
    NoRoute { from: LocationId, to: LocationId },
}
