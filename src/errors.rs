/*!
 * Error types for the timescribe library.
 *
 * The core mapping never fails hard: unparsable dates degrade to
 * open-ended events or dropped eras, and order violations are
 * diagnostics. The types here cover the fallible edges (parameter
 * deserialization), using the thiserror crate for ergonomic error
 * definitions.
 */

use thiserror::Error;

/// Errors that can occur while reading authored parameters
#[derive(Error, Debug)]
pub enum ParamsError {
    /// The authored JSON did not match the parameter structure
    #[error("Failed to parse timeline parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum TimelineError {
    /// Error from parameter handling
    #[error("Parameter error: {0}")]
    Params(#[from] ParamsError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for TimelineError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
