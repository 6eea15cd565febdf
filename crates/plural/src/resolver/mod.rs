//! Variant resolution.
//!
//! This module classifies each request's quantity and expands shortcuts and
//! candidate strings into the substitution keys a template refers to.

mod config;
mod error;
mod resolve;

pub use config::{DEFAULT_SEPARATOR, ResolveConfig};
pub use error::ResolveError;
pub use resolve::{Resolver, candidate_key, resolve, resolve_str, shortcut_key};
