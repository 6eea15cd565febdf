use super::{Category, Quantity};

/// One quantity together with the candidate strings that depend on it.
///
/// Requests are identified by their position in the sequence passed to the
/// resolver, so order matters: the request at index `2` produces keys that
/// start with `P2`.
///
/// # Example
///
/// ```
/// use plural::VariantRequest;
///
/// let request = VariantRequest::new(3)
///     .with_candidate("This|These")
///     .with_candidate("a |");
/// assert_eq!(request.candidates().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRequest {
    quantity: Quantity,
    candidates: Vec<String>,
}

impl VariantRequest {
    /// Create a request with no candidate strings.
    ///
    /// Such a request still produces every shortcut key.
    pub fn new(quantity: impl Into<Quantity>) -> Self {
        Self {
            quantity: quantity.into(),
            candidates: Vec::new(),
        }
    }

    /// Append one candidate string.
    pub fn with_candidate(mut self, candidate: impl Into<String>) -> Self {
        self.candidates.push(candidate.into());
        self
    }

    /// Append several candidate strings, preserving their order.
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates.extend(candidates.into_iter().map(Into::into));
        self
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn category(&self) -> Category {
        self.quantity.category()
    }
}
