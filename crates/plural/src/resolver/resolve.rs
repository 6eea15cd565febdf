//! Turns variant requests into substitution keys.

use log::{debug, trace};

use crate::parser::parse_requests;
use crate::resolver::{ResolveConfig, ResolveError};
use crate::shortcuts::shortcuts;
use crate::types::{Substitutions, VariantRequest, WordForms};

/// Prefix shared by every generated key.
const KEY_PREFIX: char = 'P';

/// A validated resolver.
///
/// Construction checks the configuration once; resolving afterwards cannot
/// fail. The resolver keeps no state between calls, so the same inputs
/// always give the same mapping.
///
/// # Example
///
/// ```
/// use plural::{ResolveConfig, Resolver, VariantRequest};
///
/// let resolver = Resolver::new(ResolveConfig::default()).unwrap();
/// let subs = resolver.resolve(&[VariantRequest::new(2), VariantRequest::new(1)]);
/// assert_eq!(subs.get("P0s"), Some("s"));
/// assert_eq!(subs.get("P1s"), Some(""));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ResolveConfig,
}

impl Resolver {
    /// Create a resolver, rejecting unusable configurations.
    pub fn new(config: ResolveConfig) -> Result<Self, ResolveError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Resolve every request into one flat mapping.
    ///
    /// For the request at index `i` this emits `P{i}{name}` for every
    /// shortcut and `P{i}{separator}{candidate}` for every candidate string,
    /// each valued with the form matching the request's category. A later
    /// entry silently replaces an earlier one with the same key.
    pub fn resolve(&self, requests: &[VariantRequest]) -> Substitutions {
        let separator = self.config.separator();
        debug!(
            "resolving {} variant requests with separator {separator:?}",
            requests.len()
        );

        let mut result = Substitutions::new();
        for (index, request) in requests.iter().enumerate() {
            let category = request.category();
            trace!(
                "request {index}: quantity {} selects {category}",
                request.quantity()
            );

            for entry in shortcuts() {
                result.insert(shortcut_key(index, &entry.name), entry.select(category));
            }

            for candidate in request.candidates() {
                let forms = WordForms::split(candidate, separator);
                result.insert(
                    candidate_key(index, separator, candidate),
                    forms.select(category),
                );
            }
        }
        result
    }

    /// Parse request lines and resolve them.
    ///
    /// See [`parse_requests`] for the line format.
    pub fn resolve_str(&self, input: &str) -> Result<Substitutions, ResolveError> {
        let requests = parse_requests(input)?;
        Ok(self.resolve(&requests))
    }
}

/// Key under which the shortcut `name` of request `index` is stored.
///
/// ```
/// assert_eq!(plural::resolver::shortcut_key(3, "ies"), "P3ies");
/// ```
pub fn shortcut_key(index: usize, name: &str) -> String {
    format!("{KEY_PREFIX}{index}{name}")
}

/// Key under which a candidate string of request `index` is stored.
///
/// The candidate is used as written, separators included.
///
/// ```
/// assert_eq!(plural::resolver::candidate_key(0, "<x>", "Leaf<x>Leaves"), "P0<x>Leaf<x>Leaves");
/// ```
pub fn candidate_key(index: usize, separator: &str, candidate: &str) -> String {
    format!("{KEY_PREFIX}{index}{separator}{candidate}")
}

/// Resolve requests with the given configuration in one call.
///
/// # Example
///
/// ```
/// use plural::{ResolveConfig, VariantRequest, resolve};
///
/// let requests = [VariantRequest::new(0).with_candidate("leaf|leaves")];
/// let subs = resolve(&requests, &ResolveConfig::default()).unwrap();
/// assert_eq!(subs.get("P0|leaf|leaves"), Some("leaves"));
/// ```
pub fn resolve(
    requests: &[VariantRequest],
    config: &ResolveConfig,
) -> Result<Substitutions, ResolveError> {
    Ok(Resolver::new(config.clone())?.resolve(requests))
}

/// Parse request lines and resolve them with the given configuration.
///
/// The configuration is checked before the input is parsed.
///
/// # Example
///
/// ```
/// use plural::{ResolveConfig, resolve_str};
///
/// let subs = resolve_str("3 \"This|These\" \"a |\"", &ResolveConfig::default()).unwrap();
/// assert_eq!(subs.get("P0|This|These"), Some("These"));
/// assert_eq!(subs.get("P0|a |"), Some(""));
/// assert_eq!(subs.get("P0is"), Some("are"));
/// ```
pub fn resolve_str(input: &str, config: &ResolveConfig) -> Result<Substitutions, ResolveError> {
    Resolver::new(config.clone())?.resolve_str(input)
}
