//! Recognized operator tags.

use std::fmt;

/// Operator element recognized as a `decl` child.
///
/// Only `Add` is evaluated today. `Sub`, `Mult` and `Div` are accepted
/// syntactically and bind the `Unimplemented` placeholder value; giving them
/// semantics is a language change, not a bug fix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    Div,
}

impl Operator {
    /// Match an element tag against the operator set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "add" => Some(Operator::Add),
            "sub" => Some(Operator::Sub),
            "mult" => Some(Operator::Mult),
            "div" => Some(Operator::Div),
            _ => None,
        }
    }

    /// The element spelling of this operator.
    pub fn tag(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mult => "mult",
            Operator::Div => "div",
        }
    }

    /// Whether this operator has evaluation semantics.
    #[inline]
    pub fn is_implemented(self) -> bool {
        matches!(self, Operator::Add)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
