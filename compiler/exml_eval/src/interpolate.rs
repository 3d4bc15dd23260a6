//! `{name}` placeholder interpolation for `print` text.

use crate::environment::Environment;
use crate::error::{unknown_placeholder, EvalResult};

/// Find placeholder matches in `text`, braces included, leftmost first.
///
/// A placeholder is `{` followed by any run of characters excluding `\` and
/// `}`, then `}`. A `{` whose run hits a backslash (or the end of the text)
/// opens no placeholder; scanning resumes at the next `{`. Matches never
/// overlap.
fn matches(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'{' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] != b'}' && bytes[j] != b'\\' {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'}' {
                // Delimiters are ASCII, so these byte offsets are char
                // boundaries even in multibyte text.
                found.push(&text[i..=j]);
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
    found
}

/// Substitute every placeholder in `text` with the referenced variable's
/// textual representation.
///
/// Matches are processed first to last; each substitution is a literal
/// replacement of the full `{...}` match throughout the working text.
/// A placeholder naming an unbound variable (or one that reads as unbound
/// under the environment's falsy semantics) fails the whole expansion.
pub fn expand(text: &str, env: &Environment) -> EvalResult<String> {
    let mut result = text.to_string();
    for matched in matches(text) {
        let name = &matched[1..matched.len() - 1];
        let value = env.lookup(name).ok_or_else(unknown_placeholder)?;
        result = result.replace(matched, &value.to_string());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalErrorKind;
    use exml_ir::Value;
    use pretty_assertions::assert_eq;

    fn env_with(bindings: &[(&str, Value)]) -> Environment {
        let mut env = Environment::new();
        for (name, value) in bindings {
            env.bind(*name, value.clone());
        }
        env
    }

    #[test]
    fn substitutes_a_bound_variable() {
        let env = env_with(&[("x", Value::int(5))]);
        assert_eq!(expand("x={x}", &env).unwrap(), "x=5");
    }

    #[test]
    fn substitutes_multiple_placeholders_in_order() {
        let env = env_with(&[("a", Value::int(1)), ("b", Value::string("two"))]);
        assert_eq!(expand("{a} and {b}", &env).unwrap(), "1 and two");
    }

    #[test]
    fn repeated_placeholder_replaces_every_occurrence() {
        let env = env_with(&[("x", Value::int(9))]);
        assert_eq!(expand("{x}+{x}={x}{x}", &env).unwrap(), "9+9=99");
    }

    #[test]
    fn unknown_variable_fails_the_expansion() {
        let env = Environment::new();
        let err = expand("hello {y}", &env).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::UnknownPlaceholder);
    }

    #[test]
    fn falsy_variable_reads_as_unknown() {
        let env = env_with(&[("zero", Value::int(0))]);
        assert!(expand("{zero}", &env).is_err());
    }

    #[test]
    fn text_without_placeholders_passes_through() {
        let env = Environment::new();
        assert_eq!(expand("plain text", &env).unwrap(), "plain text");
        assert_eq!(expand("half {open", &env).unwrap(), "half {open");
    }

    #[test]
    fn backslash_blocks_a_candidate() {
        let env = env_with(&[("x", Value::int(1))]);
        // The first `{` never closes before a backslash; the second does.
        assert_eq!(expand(r"{a\b} {x}", &env).unwrap(), r"{a\b} 1");
    }

    #[test]
    fn nested_open_brace_is_part_of_the_name() {
        // `{a{b}` is one match whose name is `a{b` — the scanner excludes
        // only backslash and the closing brace from the name run.
        assert_eq!(matches("{a{b}"), vec!["{a{b}"]);
    }

    #[test]
    fn float_rendering_in_interpolation() {
        let env = env_with(&[("f", Value::float(2.0))]);
        assert_eq!(expand("f={f}", &env).unwrap(), "f=2.0");
    }

    #[test]
    fn unimplemented_placeholder_renders_visibly() {
        let env = env_with(&[("p", Value::Unimplemented)]);
        assert_eq!(expand("{p}", &env).unwrap(), "<unimplemented>");
    }
}
