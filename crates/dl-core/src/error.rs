use std::path::PathBuf;

use crate::location::LocationId;

/// Alias for `Result<T, MapError>`.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur when loading or querying a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The requested location ID does not exist in the map.
    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),

    /// The map data is structurally invalid.
    #[error("malformed map data: {0}")]
    MalformedData(String),

    /// The map file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedData(err.to_string())
    }
}
