//! Errors surfaced while building a session.
//!
//! Only level loading can fail. Everything that goes wrong inside a tick is
//! absorbed with a safe default and logged instead.

use std::path::PathBuf;

/// Alias for `Result<T, LevelError>`.
pub type LevelResult<T> = Result<T, LevelError>;

/// Errors that abort level setup.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// A required object layer is not present in the level document.
    #[error("level is missing required object layer \"{name}\"")]
    MissingLayer {
        /// Name of the layer that was looked up.
        name: &'static str,
    },

    /// The level document is not valid Tiled JSON.
    #[error("failed to parse level JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The level file could not be read.
    #[error("failed to read level file {path:?}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
