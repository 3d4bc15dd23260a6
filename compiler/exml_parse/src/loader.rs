//! Lowering from the XML DOM to the interpreter's node tree.

use exml_ir::{Document, Node, Span};
use tracing::trace;

use crate::DocumentError;

/// Parse `source` and lower it into a [`Document`].
///
/// The root element becomes the document root; its element children are the
/// program's top-level statements. Fails only when the input is not
/// well-formed XML.
pub fn load_document(source: &str) -> Result<Document, DocumentError> {
    let dom = roxmltree::Document::parse(source)?;
    let root = lower(dom.root_element());
    trace!(
        statements = root.children.len(),
        root = root.tag.as_str(),
        "loaded document"
    );
    Ok(Document { root })
}

/// Lower one element and everything under it.
///
/// - attributes become the node's attribute map (keys unique per the XML
///   grammar),
/// - text content is the element's leading text, with empty text normalized
///   to `None` (whitespace-only text is preserved),
/// - only element children are lowered; comments, processing instructions
///   and interleaved text are dropped.
fn lower(element: roxmltree::Node<'_, '_>) -> Node {
    let mut node = Node::new(element.tag_name().name(), Span::from_range(element.range()));
    for attribute in element.attributes() {
        node.attributes
            .insert(attribute.name().to_string(), attribute.value().to_string());
    }
    node.text = element
        .text()
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    node.children = element
        .children()
        .filter(roxmltree::Node::is_element)
        .map(lower)
        .collect();
    node
}
