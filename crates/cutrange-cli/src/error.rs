//! Semantic error types for the command line front end.

use cutrange::SpecError;
use thiserror::Error;

/// Errors that can occur while running a command.
///
/// Library errors appear in the message and are not chained as sources.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The range specification could not be compiled.
    #[error("invalid range: {0}")]
    Spec(SpecError),

    /// A value to check is not an integer.
    #[error("invalid value '{text}': {reason}")]
    InvalidValue {
        /// The value as given.
        text: String,
        /// Why it was rejected.
        reason: SpecError,
    },

    /// A line of input could not be read.
    #[error("failed to read line {line}")]
    Read {
        /// One-based number of the unreadable line.
        line: usize,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },
}

impl From<SpecError> for CliError {
    fn from(error: SpecError) -> Self {
        Self::Spec(error)
    }
}
