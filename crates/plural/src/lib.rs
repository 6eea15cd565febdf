//! Pick null, singular or plural word forms for template substitution.
//!
//! A caller lists [`VariantRequest`]s, each a quantity plus optional candidate
//! strings such as `"leaf|leaves"`. [`resolve`] classifies every quantity as
//! zero, singular or plural and returns a flat [`Substitutions`] mapping from
//! keys like `P0s` or `P0|leaf|leaves` to the selected form.
//!
//! # Example
//!
//! ```
//! use plural::{ResolveConfig, requests, resolve};
//!
//! let subs = resolve(&requests![(2), (1, "Leaf|Leaves")], &ResolveConfig::default()).unwrap();
//! assert_eq!(format!("Word{}", &subs["P0s"]), "Words");
//! assert_eq!(&subs["P1|Leaf|Leaves"], "Leaf");
//! ```

pub mod parser;
pub mod resolver;
pub mod shortcuts;
pub mod types;

pub use parser::ParseError;
pub use resolver::{
    DEFAULT_SEPARATOR, ResolveConfig, ResolveError, Resolver, resolve, resolve_str,
};
pub use shortcuts::{ShortcutEntry, shortcut, shortcut_listing, shortcuts};
pub use types::{Category, Quantity, Substitutions, VariantRequest, WordForms};

/// Creates a `Vec<VariantRequest>` from parenthesized request literals.
///
/// Each request is `(quantity)` or `(quantity, candidate, ...)`. Quantities
/// are converted via `Into<Quantity>` and candidates via `Into<String>`.
///
/// # Example
///
/// ```
/// use plural::{Quantity, requests};
///
/// let r = requests![(2), (0, "leaf|leaves", "man|men")];
/// assert_eq!(r.len(), 2);
/// assert!(r[0].candidates().is_empty());
/// assert_eq!(r[1].quantity(), &Quantity::Integer(0));
/// assert_eq!(r[1].candidates(), ["leaf|leaves", "man|men"]);
/// ```
#[macro_export]
macro_rules! requests {
    [] => {
        ::std::vec::Vec::<$crate::VariantRequest>::new()
    };
    [ $( ( $quantity:expr $(, $candidate:expr)* ) ),+ $(,)? ] => {
        ::std::vec![
            $(
                $crate::VariantRequest::new($quantity)
                    $(.with_candidate($candidate))*
            ),+
        ]
    };
}
