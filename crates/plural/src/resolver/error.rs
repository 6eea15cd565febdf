//! Error types for resolving variant requests.

use thiserror::Error;

use crate::parser::ParseError;

/// An error that prevents a resolve call from producing any output.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The resolver configuration cannot be used for splitting candidates.
    #[error("invalid separator {separator:?}: {reason}")]
    Configuration {
        separator: String,
        reason: &'static str,
    },

    /// A textual request could not be turned into a variant request.
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] ParseError),
}
