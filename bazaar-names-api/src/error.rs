/// Errors that can occur while fetching and validating endpoint responses.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed {status} {reason} for {url}")]
    Request {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("{label} API returned an error: {cause}")]
    Api { label: String, cause: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn api(label: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::Api {
            label: label.into(),
            cause: cause.into(),
        }
    }

    /// HTTP status for `Request` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
