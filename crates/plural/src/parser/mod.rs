//! Textual request format.
//!
//! Requests can be written one per line instead of being built in code,
//! which is how request files and command-line arguments are read.

pub mod error;
mod request;

pub use error::ParseError;
pub use request::{parse_request, parse_request_list, parse_requests};
