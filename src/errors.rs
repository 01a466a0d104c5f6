//! Error kinds recovered at the top level.
//!
//! Every kind maps to exit code 1; the display string is the one-line
//! diagnostic the binary prints before exiting.

use thiserror::Error;

#[derive(Debug, Error)]
/// Failure kinds surfaced by `run` and mapped to exit codes by the binary.
pub enum RankError {
    /// Captured linter output was not valid JSON (truncated output included).
    #[error("Error parsing ESLint JSON output: {0}")]
    JsonParse(#[from] serde_json::Error),
    /// The linter process could not be launched or run to completion.
    #[error("Error running ESLint: {0}")]
    Invocation(#[from] std::io::Error),
    /// Catch-all for any other failure.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RankError {
    /// Process exit code for this kind. All recovered kinds exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            RankError::JsonParse(_) => 1,
            RankError::Invocation(_) => 1,
            RankError::Unexpected(_) => 1,
        }
    }
}
