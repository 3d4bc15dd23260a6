//! exml IR - Document tree and runtime value types for the exml interpreter.
//!
//! An exml program is a well-formed XML document whose elements are typed
//! commands. This crate holds the loaded form of that document (`Document`,
//! `Node`) together with the runtime core types the evaluator operates on
//! (`Value`, `TypeTag`, `Operator`, `Span`).
//!
//! Nothing here evaluates anything: loading lives in `exml_parse`, semantics
//! live in `exml_eval`.

mod node;
mod op;
mod span;
mod type_tag;
mod value;

pub use node::{Document, Node};
pub use op::Operator;
pub use span::Span;
pub use type_tag::TypeTag;
pub use value::Value;
