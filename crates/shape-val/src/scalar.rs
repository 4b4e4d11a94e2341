use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

lazy_static::lazy_static! {
    // optional sign, digits, at most one decimal point
    static ref NUMERIC: Regex = Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").unwrap();
}

/// A leaf value of a [`Node`](crate::Node) tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    pub fn str(s: impl Into<String>) -> Self {
        Scalar::Str(s.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Scalar::Nil)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Nil => "nil",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "str",
        }
    }

    /// Coerces a string scalar through [`autobox`]. Typed scalars are
    /// returned unchanged.
    pub fn boxed(self) -> Scalar {
        match self {
            Scalar::Str(s) => autobox(&s),
            other => other,
        }
    }

    pub fn unbox(&self) -> String {
        unbox(self)
    }
}

/// Turns raw text into the typed scalar it looks like.
///
/// Numeric text becomes `Int`, or `Float` when it carries a decimal point;
/// `"true"` and `"false"` become `Bool`; anything else stays a `Str`.
///
/// ```rust
/// use shape_val::{autobox, Scalar};
///
/// assert_eq!(autobox("42"), Scalar::Int(42));
/// assert_eq!(autobox("42.5"), Scalar::Float(42.5));
/// assert_eq!(autobox("true"), Scalar::Bool(true));
/// assert_eq!(autobox("hi"), Scalar::str("hi"));
/// ```
pub fn autobox(raw: &str) -> Scalar {
    if NUMERIC.is_match(raw) {
        if !raw.contains('.') {
            if let Ok(i) = raw.parse::<i64>() {
                return Scalar::Int(i);
            }
        }
        // too wide for i64 falls through to a float
        if let Ok(f) = raw.parse::<f64>() {
            return Scalar::Float(f);
        }
    }

    match raw {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => Scalar::Str(raw.to_string()),
    }
}

/// Renders a scalar as the text written at format boundaries.
pub fn unbox(value: &Scalar) -> String {
    match value {
        Scalar::Nil => String::new(),
        Scalar::Bool(true) => "true".to_string(),
        Scalar::Bool(false) => "false".to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Str(s) => s.clone(),
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", unbox(self))
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Nil => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Int(i as i64)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<u32> for Scalar {
    fn from(u: u32) -> Self {
        Scalar::Int(u as i64)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autobox_numbers() {
        assert_eq!(autobox("42"), Scalar::Int(42));
        assert_eq!(autobox("-7"), Scalar::Int(-7));
        assert_eq!(autobox("+3"), Scalar::Int(3));
        assert_eq!(autobox("42.5"), Scalar::Float(42.5));
        assert_eq!(autobox(".5"), Scalar::Float(0.5));
        assert_eq!(autobox("1.25"), Scalar::Float(1.25));
    }

    #[test]
    fn test_autobox_wide_integer_becomes_float() {
        assert_eq!(
            autobox("99999999999999999999"),
            Scalar::Float(99999999999999999999.0)
        );
    }

    #[test]
    fn test_autobox_bools_and_strings() {
        assert_eq!(autobox("true"), Scalar::Bool(true));
        assert_eq!(autobox("false"), Scalar::Bool(false));
        assert_eq!(autobox("True"), Scalar::str("True"));
        assert_eq!(autobox("hi"), Scalar::str("hi"));
        assert_eq!(autobox(""), Scalar::str(""));
        assert_eq!(autobox("5%"), Scalar::str("5%"));
        assert_eq!(autobox("1.2.3"), Scalar::str("1.2.3"));
        assert_eq!(autobox(" 12"), Scalar::str(" 12"));
        assert_eq!(autobox("1e5"), Scalar::str("1e5"));
    }

    #[test]
    fn test_boxed_passes_typed_values() {
        assert_eq!(Scalar::Bool(true).boxed(), Scalar::Bool(true));
        assert_eq!(Scalar::Float(2.0).boxed(), Scalar::Float(2.0));
        assert_eq!(Scalar::Nil.boxed(), Scalar::Nil);
        assert_eq!(Scalar::str("15").boxed(), Scalar::Int(15));
    }

    #[test]
    fn test_unbox() {
        assert_eq!(unbox(&Scalar::Bool(true)), "true");
        assert_eq!(unbox(&Scalar::Bool(false)), "false");
        assert_eq!(unbox(&Scalar::Int(42)), "42");
        assert_eq!(unbox(&Scalar::Float(1.5)), "1.5");
        assert_eq!(unbox(&Scalar::Nil), "");
        assert_eq!(Scalar::str("hi").to_string(), "hi");
    }

    #[test]
    fn test_unbox_then_autobox() {
        for value in [
            Scalar::Int(1337),
            Scalar::Float(1.5),
            Scalar::Bool(false),
            Scalar::str("Barbarian"),
        ] {
            assert_eq!(autobox(&unbox(&value)), value);
        }
    }
}
