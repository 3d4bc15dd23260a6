//! Stable error codes.

use std::fmt;

/// Stable, searchable code for every failure the toolchain can report.
///
/// Ranges:
/// - `E0xxx` — structural (the input is not a well-formed document)
/// - `E1xxx` — syntax (malformed program structure)
/// - `E2xxx` — runtime (valid structure whose evaluation cannot proceed)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input is not well-formed XML.
    E0001,

    /// `decl` is missing its `name` attribute.
    E1001,
    /// `decl` has an unknown `type` attribute value.
    E1002,
    /// Inferred `decl` has raw text instead of an expression child.
    E1003,
    /// `decl` has more than one child element.
    E1004,
    /// `decl` child is not a recognized operator.
    E1005,
    /// `add` has no children.
    E1006,
    /// `var` has an attribute set other than exactly `name`.
    E1007,
    /// `num` carries attributes.
    E1008,
    /// `num` has no text.
    E1009,

    /// Variable is not bound (or reads as unbound).
    E2001,
    /// `num` text does not parse as a number.
    E2002,
    /// `decl` text does not parse as the declared type.
    E2003,
    /// `print` `usevars` attribute is neither `"true"` nor `"false"`.
    E2004,
    /// Interpolation placeholder names an unknown variable.
    E2005,
    /// Non-numeric value used as an arithmetic operand.
    E2006,
    /// Integer arithmetic overflowed.
    E2007,
}

impl ErrorCode {
    /// The canonical `Exxxx` spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
        }
    }

    /// Whether this code is in the syntax range.
    pub fn is_syntax(self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Whether this code is in the runtime range.
    pub fn is_runtime(self) -> bool {
        self.as_str().starts_with("E2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_ranges() {
        assert!(!ErrorCode::E0001.is_syntax());
        assert!(!ErrorCode::E0001.is_runtime());
        assert!(ErrorCode::E1001.is_syntax());
        assert!(ErrorCode::E2001.is_runtime());
        assert!(!ErrorCode::E2001.is_syntax());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::E1007.to_string(), "E1007");
    }
}
