//! Parse error types for request lines.

use thiserror::Error;

/// An error that occurred while parsing request lines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The request has no leading quantity field.
    #[error("request on line {line} is missing its leading quantity")]
    MissingQuantity { line: usize },

    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// The 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingQuantity { line } | ParseError::Syntax { line, .. } => *line,
        }
    }
}
