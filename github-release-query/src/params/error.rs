//! Parameter loading error types.

use thiserror::Error;

/// Errors that can occur while loading a parameters file.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Failed to read the file.
    #[error("Failed to read parameters file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the JSON content.
    #[error("Failed to parse parameters file '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
