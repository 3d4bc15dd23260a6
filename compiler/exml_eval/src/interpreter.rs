//! Statement interpreter: one pass over the document's top-level commands.

use exml_ir::{Document, Node, Operator, TypeTag, Value};
use tracing::{debug, trace};

use crate::cast::cast;
use crate::environment::Environment;
use crate::error::{
    extra_decl_children, invalid_decl_type, invalid_operator_child, invalid_usevars,
    missing_decl_name, EvalError,
};
use crate::exprs::eval_add;
use crate::interpolate;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Tree-walking interpreter for one program run.
///
/// Walks the root's children in document order, dispatching on tag: `decl`
/// mutates the environment, `print` writes to the output sink, anything else
/// is ignored (forward-compatibility slot, not an error). There is no
/// forward reference resolution — a `print` naming a later `decl` fails at
/// the point it is evaluated — and the first failure aborts the run with
/// already-emitted lines left standing.
pub struct Interpreter {
    env: Environment,
    print: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter with a fresh environment (reference lookup semantics)
    /// writing to stdout.
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
            print: stdout_handler(),
        }
    }

    /// Replace the output sink.
    #[must_use]
    pub fn with_print_handler(mut self, print: SharedPrintHandler) -> Self {
        self.print = print;
        self
    }

    /// Use the strict presence check instead of the reference
    /// falsy-as-unbound lookup. Only meaningful before `run`.
    #[must_use]
    pub fn with_strict_presence(mut self) -> Self {
        self.env = Environment::with_strict_presence();
        self
    }

    /// The run's variable bindings.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Execute every top-level statement of `doc`, in document order.
    pub fn run(&mut self, doc: &Document) -> Result<(), EvalError> {
        for statement in doc.statements() {
            match statement.tag.as_str() {
                "decl" => self.exec_decl(statement)?,
                "print" => self.exec_print(statement)?,
                other => trace!(tag = other, "ignoring unrecognized statement"),
            }
        }
        Ok(())
    }

    /// `decl`: bind a name to a value.
    fn exec_decl(&mut self, node: &Node) -> Result<(), EvalError> {
        let Some(name) = node.attr("name") else {
            return Err(missing_decl_name().with_span(node.span));
        };
        let type_tag = match node.attr("type") {
            Some(spelled) => {
                TypeTag::parse(spelled).ok_or_else(|| invalid_decl_type().with_span(node.span))?
            }
            None => TypeTag::Infer,
        };

        let value = match node.children.as_slice() {
            [] => match node.text() {
                None => Value::Absent,
                Some(text) => cast(type_tag, text).map_err(|err| err.with_span(node.span))?,
            },
            [child] => {
                let operator = Operator::from_tag(&child.tag)
                    .ok_or_else(|| invalid_operator_child().with_span(child.span))?;
                if operator.is_implemented() {
                    eval_add(child, &self.env)?
                } else {
                    Value::Unimplemented
                }
            }
            _ => return Err(extra_decl_children().with_span(node.span)),
        };

        debug!(name, value = %value, "decl");
        self.env.bind(name, value);
        Ok(())
    }

    /// `print`: emit one line to the output sink.
    fn exec_print(&self, node: &Node) -> Result<(), EvalError> {
        let usevars = match node.attr("usevars").unwrap_or("false") {
            "true" => true,
            "false" => false,
            _ => return Err(invalid_usevars().with_span(node.span)),
        };
        match node.text() {
            Some(text) if usevars => {
                let expanded = interpolate::expand(text, &self.env)
                    .map_err(|err| err.with_span(node.span))?;
                self.print.println(expanded.trim());
            }
            Some(text) => self.print.println(text.trim()),
            None => self.print.println(""),
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
