use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Category;

/// The test value of a variant request.
///
/// A quantity is only ever compared against the integers `0` and `1`, so any
/// kind of value is accepted. Only [`Quantity::Integer`] can select the zero
/// or singular form: floats, booleans and text always select the plural form,
/// even when they print as `0` or `1`.
///
/// # Example
///
/// ```
/// use plural::{Category, Quantity};
///
/// let count: Quantity = 1.into();
/// assert_eq!(count.category(), Category::Singular);
///
/// let ratio: Quantity = 1.0.into();
/// assert_eq!(ratio.category(), Category::Plural);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    /// An integer of any width.
    Integer(i128),

    /// A floating-point number.
    Float(f64),

    /// A boolean flag.
    Bool(bool),

    /// Any other value, kept as text.
    Text(String),
}

impl Quantity {
    /// Get this quantity as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Quantity::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this quantity as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Quantity::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The grammatical number this quantity selects.
    pub fn category(&self) -> Category {
        Category::of(self)
    }

    /// Interpret a bare token the way request lines do.
    ///
    /// Integers are tried first, then `true`/`false`, then floats. Anything
    /// else becomes [`Quantity::Text`].
    pub fn from_token(token: &str) -> Quantity {
        if let Ok(n) = token.parse::<i128>() {
            return Quantity::Integer(n);
        }
        match token {
            "true" => return Quantity::Bool(true),
            "false" => return Quantity::Bool(false),
            _ => {}
        }
        match token.parse::<f64>() {
            Ok(f) => Quantity::Float(f),
            Err(_) => Quantity::Text(token.to_string()),
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Quantity::Integer(n) => write!(f, "{n}"),
            Quantity::Float(n) => write!(f, "{n}"),
            Quantity::Bool(b) => write!(f, "{b}"),
            Quantity::Text(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! integer_quantity {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Quantity {
                fn from(n: $ty) -> Self {
                    Quantity::Integer(i128::from(n))
                }
            }
        )+
    };
}

integer_quantity!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Quantity {
    fn from(n: isize) -> Self {
        Quantity::Integer(n as i128)
    }
}

impl From<usize> for Quantity {
    fn from(n: usize) -> Self {
        Quantity::Integer(n as i128)
    }
}

/// Values above `i128::MAX` saturate, which still classifies as plural.
impl From<u128> for Quantity {
    fn from(n: u128) -> Self {
        Quantity::Integer(i128::try_from(n).unwrap_or(i128::MAX))
    }
}

impl From<f32> for Quantity {
    fn from(n: f32) -> Self {
        Quantity::Float(f64::from(n))
    }
}

impl From<f64> for Quantity {
    fn from(n: f64) -> Self {
        Quantity::Float(n)
    }
}

impl From<bool> for Quantity {
    fn from(b: bool) -> Self {
        Quantity::Bool(b)
    }
}

impl From<String> for Quantity {
    fn from(s: String) -> Self {
        Quantity::Text(s)
    }
}

impl From<&str> for Quantity {
    fn from(s: &str) -> Self {
        Quantity::Text(s.to_string())
    }
}
