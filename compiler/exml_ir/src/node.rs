//! Loaded document tree.
//!
//! `exml_parse` lowers the XML DOM into this tree once; the interpreter only
//! ever reads it. A `Node` owns its children outright (strict tree, no
//! sharing), so a `Document` can be walked without any lifetime plumbing
//! back into the source text.

use rustc_hash::FxHashMap;

use crate::Span;

/// One loaded program: the document root plus everything under it.
///
/// The root element's children are the program's top-level statements.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Node,
}

impl Document {
    /// Top-level statement nodes, in document order.
    #[inline]
    pub fn statements(&self) -> &[Node] {
        &self.root.children
    }
}

/// One structural element: tag, attributes, text content, ordered children.
///
/// Invariant: `text` is `Some` only when the element carried non-empty text
/// content; the loader normalizes empty text to `None` so that "no text" has
/// a single representation.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub tag: String,
    /// Attribute map; keys are unique (XML guarantees this at parse time).
    pub attributes: FxHashMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<Node>,
    pub span: Span,
}

impl Node {
    /// Create a childless, attribute-free node. Mostly useful for tests and
    /// programmatic tree construction.
    pub fn new(tag: impl Into<String>, span: Span) -> Self {
        Node {
            tag: tag.into(),
            attributes: FxHashMap::default(),
            text: None,
            children: Vec::new(),
            span,
        }
    }

    /// Look up an attribute value by name.
    #[inline]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Number of attributes on this element.
    #[inline]
    pub fn attr_count(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the attribute set is exactly `names` (no extras, no misses).
    pub fn has_exactly_attrs(&self, names: &[&str]) -> bool {
        self.attributes.len() == names.len()
            && names.iter().all(|name| self.attributes.contains_key(*name))
    }

    /// Text content, if any. `None` means the element had no (non-empty)
    /// text; whitespace-only text is still text.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
