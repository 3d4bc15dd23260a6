//! Declared-type casting for `decl` text.

use exml_ir::{TypeTag, Value};

use crate::error::{cannot_infer_without_children, invalid_cast, EvalResult};

/// Cast raw declaration text to the declared type.
///
/// Numeric casts parse the trimmed text; `str` keeps the text verbatim,
/// whitespace included. `infer` is never legal here — inference needs an
/// expression child to take a type from, and text has none — so it reports
/// the same syntax failure the statement interpreter does.
pub fn cast(target: TypeTag, text: &str) -> EvalResult {
    match target {
        TypeTag::Int => text
            .trim()
            .parse::<i64>()
            .map(Value::int)
            .map_err(|_| invalid_cast(target)),
        TypeTag::Float => text
            .trim()
            .parse::<f64>()
            .map(Value::float)
            .map_err(|_| invalid_cast(target)),
        TypeTag::Str => Ok(Value::string(text)),
        TypeTag::Infer => Err(cannot_infer_without_children()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorClass, EvalErrorKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn int_cast_parses_integers() {
        assert_eq!(cast(TypeTag::Int, "42"), Ok(Value::int(42)));
        assert_eq!(cast(TypeTag::Int, " -7 "), Ok(Value::int(-7)));
        assert_eq!(cast(TypeTag::Int, "+3"), Ok(Value::int(3)));
    }

    #[test]
    fn int_cast_rejects_non_integers() {
        let err = cast(TypeTag::Int, "5.5").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::InvalidCast { target: TypeTag::Int });
        assert_eq!(err.class(), ErrorClass::Runtime);
        assert!(cast(TypeTag::Int, "abc").is_err());
        assert!(cast(TypeTag::Int, "").is_err());
    }

    #[test]
    fn float_cast_parses_reals() {
        assert_eq!(cast(TypeTag::Float, "5"), Ok(Value::float(5.0)));
        assert_eq!(cast(TypeTag::Float, "0.25"), Ok(Value::float(0.25)));
        assert_eq!(cast(TypeTag::Float, "1e3"), Ok(Value::float(1000.0)));
        assert!(cast(TypeTag::Float, "five").is_err());
    }

    #[test]
    fn str_cast_keeps_text_verbatim() {
        assert_eq!(cast(TypeTag::Str, "  hello  "), Ok(Value::string("  hello  ")));
    }

    #[test]
    fn infer_from_text_is_a_syntax_failure() {
        let err = cast(TypeTag::Infer, "5").unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::CannotInferWithoutChildren);
        assert_eq!(err.class(), ErrorClass::Syntax);
    }
}
