use std::path::PathBuf;

use bazaar_names_api::FetchError;
use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Fetching or validating an endpoint failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing the output file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the table failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl GenerateError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
