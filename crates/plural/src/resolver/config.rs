use bon::Builder;

use crate::resolver::ResolveError;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Settings shared by every request in a resolve call.
///
/// # Example
///
/// ```
/// use plural::ResolveConfig;
///
/// let config = ResolveConfig::builder().separator("<x>").build();
/// assert_eq!(config.separator(), "<x>");
/// assert_eq!(ResolveConfig::default().separator(), "|");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct ResolveConfig {
    /// Delimiter between the forms of a candidate string.
    #[builder(default = DEFAULT_SEPARATOR.to_string())]
    separator: String,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig::builder().build()
    }
}

impl ResolveConfig {
    /// Create a configuration with a custom separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        ResolveConfig::builder().separator(separator.into()).build()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Check that the configuration can be used.
    ///
    /// An empty separator is rejected because splitting on it is undefined.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.separator.is_empty() {
            return Err(ResolveError::Configuration {
                separator: self.separator.clone(),
                reason: "separator must not be empty",
            });
        }
        Ok(())
    }
}
