//! Runtime values for the exml interpreter.
//!
//! Values are immutable once produced; arithmetic builds new values.
//! `Absent` is a real state ("declared with no value"), distinct from zero
//! or the empty string. `Unimplemented` is the placeholder bound by the
//! recognized-but-unevaluated operators (`sub`, `mult`, `div`) so the gap
//! stays visible to callers instead of turning into silently wrong numbers.

use std::fmt;

/// Runtime value in the exml interpreter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(String),
    /// No value assigned (declaration with no text and no children).
    Absent,
    /// Result of a recognized operator whose evaluation is not implemented.
    Unimplemented,
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a floating-point value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Absent => "absent",
            Value::Unimplemented => "unimplemented",
        }
    }

    /// Whether this value reads as "no value" under the reference lookup
    /// semantics: absent, numeric zero, or the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Absent => true,
            Value::Unimplemented => false,
        }
    }

    /// Whether this value can participate in arithmetic.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            // Integral floats keep a trailing ".0" so a float-typed value
            // stays visibly a float in printed output.
            Value::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Absent => write!(f, "<absent>"),
            Value::Unimplemented => write!(f, "<unimplemented>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_int() {
        assert_eq!(Value::int(42).to_string(), "42");
        assert_eq!(Value::int(-7).to_string(), "-7");
    }

    #[test]
    fn display_float_keeps_integral_marker() {
        assert_eq!(Value::float(5.0).to_string(), "5.0");
        assert_eq!(Value::float(5.5).to_string(), "5.5");
        assert_eq!(Value::float(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn display_str_is_verbatim() {
        assert_eq!(Value::string("hello").to_string(), "hello");
    }

    #[test]
    fn falsy_values() {
        assert!(Value::Absent.is_falsy());
        assert!(Value::int(0).is_falsy());
        assert!(Value::float(0.0).is_falsy());
        assert!(Value::string("").is_falsy());
    }

    #[test]
    fn truthy_values() {
        assert!(!Value::int(1).is_falsy());
        assert!(!Value::float(0.5).is_falsy());
        assert!(!Value::string("x").is_falsy());
        // The operator placeholder is a present value.
        assert!(!Value::Unimplemented.is_falsy());
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::int(1).type_name(), "int");
        assert_eq!(Value::string("a").type_name(), "str");
        assert_eq!(Value::Unimplemented.type_name(), "unimplemented");
    }
}
