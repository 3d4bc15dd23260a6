//! Variable bindings for one program run.
//!
//! One flat mapping, created empty at interpreter start and discarded at the
//! end of the run: exml has no nested scopes and no forward references.
//! Rebinding a name silently overwrites; that is the language's
//! redeclaration semantics, not an error.

use rustc_hash::FxHashMap;
use tracing::trace;

use exml_ir::Value;

/// Variable-binding table for a single run.
///
/// # Falsy lookup
///
/// Under the reference semantics a binding whose value is falsy (`Absent`,
/// numeric zero, the empty string) reads as *unbound*: `lookup` misses it
/// exactly as if the `decl` never ran. That conflation looks like a latent
/// bug rather than an intentional contract, so it is kept behind the
/// `zero_as_unbound` flag — on by default to reproduce observed behavior,
/// with [`Environment::with_strict_presence`] providing the true presence
/// check.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
    zero_as_unbound: bool,
}

impl Environment {
    /// Empty environment with the reference lookup semantics
    /// (falsy values read as unbound).
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
            zero_as_unbound: true,
        }
    }

    /// Empty environment with a true presence check: any bound value,
    /// falsy or not, is found by `lookup`.
    pub fn with_strict_presence() -> Self {
        Environment {
            bindings: FxHashMap::default(),
            zero_as_unbound: false,
        }
    }

    /// Bind `name` to `value`, overwriting any earlier binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        trace!(name = name.as_str(), value = %value, "bind");
        self.bindings.insert(name, value);
    }

    /// Look up a variable. `None` means unbound — which, under the default
    /// semantics, includes bindings whose value is falsy.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let value = self.bindings.get(name)?;
        if self.zero_as_unbound && value.is_falsy() {
            return None;
        }
        Some(value)
    }

    /// Number of bindings (including falsy ones).
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings exist.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bind_then_lookup() {
        let mut env = Environment::new();
        env.bind("x", Value::int(5));
        assert_eq!(env.lookup("x"), Some(&Value::int(5)));
        assert_eq!(env.lookup("y"), None);
    }

    #[test]
    fn lookup_is_idempotent() {
        let mut env = Environment::new();
        env.bind("x", Value::float(2.5));
        assert_eq!(env.lookup("x"), env.lookup("x"));
    }

    #[test]
    fn rebinding_overwrites() {
        let mut env = Environment::new();
        env.bind("a", Value::int(1));
        env.bind("a", Value::int(2));
        assert_eq!(env.lookup("a"), Some(&Value::int(2)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn falsy_bindings_read_as_unbound_by_default() {
        let mut env = Environment::new();
        env.bind("zero", Value::int(0));
        env.bind("empty", Value::string(""));
        env.bind("none", Value::Absent);
        assert_eq!(env.lookup("zero"), None);
        assert_eq!(env.lookup("empty"), None);
        assert_eq!(env.lookup("none"), None);
        // They are still *bound*, just invisible to lookup.
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn strict_presence_finds_falsy_bindings() {
        let mut env = Environment::with_strict_presence();
        env.bind("zero", Value::int(0));
        assert_eq!(env.lookup("zero"), Some(&Value::int(0)));
    }

    #[test]
    fn unimplemented_placeholder_is_visible_to_lookup() {
        let mut env = Environment::new();
        env.bind("later", Value::Unimplemented);
        assert_eq!(env.lookup("later"), Some(&Value::Unimplemented));
    }
}
