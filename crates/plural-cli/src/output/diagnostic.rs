//! Miette diagnostic wrapper for request parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use plural::parser::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for malformed request lines.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("malformed request: {message}")]
#[diagnostic(code(plural::request))]
pub struct RequestDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl RequestDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(source_name: &str, content: &str, err: &ParseError) -> Self {
        let (line, column, message, help) = match err {
            ParseError::MissingQuantity { line } => (
                *line,
                1,
                "missing leading quantity".to_string(),
                Some("start the request with a bare quantity such as `2` or `none`".to_string()),
            ),
            ParseError::Syntax {
                line,
                column,
                message,
            } => (*line, *column, message.clone(), None),
        };

        // Convert line:column to byte offset.
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        RequestDiagnostic {
            src: NamedSource::new(source_name, content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}
