//! exml Parse - document loader for the exml interpreter.
//!
//! Well-formedness checking is delegated wholesale to `roxmltree`; this
//! crate's job is lowering the parsed XML DOM into the owned
//! [`Document`](exml_ir::Document) tree the interpreter walks. Loading
//! happens exactly once, before any interpretation; the resulting tree
//! borrows nothing from the source text.

mod error;
mod loader;

pub use error::DocumentError;
pub use loader::load_document;
