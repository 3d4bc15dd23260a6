//! Declared type names for `decl` commands.

use std::fmt;

/// Declared (or inferred) value type of a declaration.
///
/// The `type` attribute of a `decl` must name one of these; anything else is
/// a syntax error. `Infer` is only legal when the declaration carries an
/// expression child to infer from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    Float,
    Str,
    Infer,
}

impl TypeTag {
    /// Parse a `type` attribute value. The name set is closed; there are no
    /// aliases and no case folding.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "int" => Some(TypeTag::Int),
            "float" => Some(TypeTag::Float),
            "str" => Some(TypeTag::Str),
            "infer" => Some(TypeTag::Infer),
            _ => None,
        }
    }

    /// The attribute spelling of this tag.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Str => "str",
            TypeTag::Infer => "infer",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
