use bazaar_names_lib::GenerateError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The generation pipeline failed
    #[error("Failed to generate bazaar conversions: {0}")]
    Generate(#[from] GenerateError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
