//! Station store error types.

use std::path::PathBuf;

/// Errors that can occur when loading station data.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Station file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Station file is not valid station JSON
    #[error("invalid station data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two stations share an id
    #[error("duplicate station id: {0}")]
    DuplicateId(String),

    /// Reload requested on a store built from memory
    #[error("station store has no backing file to reload from")]
    NoBackingFile,
}
