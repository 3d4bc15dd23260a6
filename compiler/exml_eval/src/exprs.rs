//! Expression evaluation: `var`, `num` and `add` nodes.

use exml_ir::{Node, Value};

use crate::environment::Environment;
use crate::error::{
    add_without_children, integer_overflow, invalid_number, invalid_var_attributes,
    non_numeric_operand, num_with_attributes, num_without_value, undefined_variable, EvalError,
    EvalResult,
};

/// Outcome of evaluating one child of an operator node.
///
/// `Skip` is deliberate, not an omission: unrecognized tags inside an
/// operator are reserved for future function-call support and contribute
/// nothing to the fold. Making the variant explicit keeps that forward slot
/// visible in the dispatch.
#[derive(Debug, PartialEq)]
pub enum Operand {
    Value(Value),
    Skip,
}

/// Evaluate a `var` reference against the environment.
///
/// The attribute set must be exactly `{name}`; resolution goes through
/// [`Environment::lookup`], so the environment's falsy-lookup semantics
/// apply here.
pub fn eval_var(node: &Node, env: &Environment) -> EvalResult {
    if !node.has_exactly_attrs(&["name"]) {
        return Err(invalid_var_attributes().with_span(node.span));
    }
    // Attribute presence was just checked.
    let name = node.attr("name").unwrap_or_default();
    env.lookup(name)
        .cloned()
        .ok_or_else(|| undefined_variable(name).with_span(node.span))
}

/// Evaluate a `num` literal.
///
/// Attribute-free, non-empty text, parsed as a real number and narrowed to
/// `Int` when the value is integral (and representable); `1e3` is the
/// integer 1000, `2.5` stays a float.
pub fn eval_num(node: &Node) -> EvalResult {
    if node.attr_count() != 0 {
        return Err(num_with_attributes().with_span(node.span));
    }
    let Some(text) = node.text() else {
        return Err(num_without_value().with_span(node.span));
    };
    let parsed: f64 = text
        .trim()
        .parse()
        .map_err(|_| invalid_number().with_span(node.span))?;
    Ok(narrow(parsed))
}

/// Narrow an integral real to `Int` where `i64` can hold it.
fn narrow(value: f64) -> Value {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        Value::int(value as i64)
    } else {
        Value::float(value)
    }
}

/// Evaluate one operand inside an operator node.
pub fn eval_operand(node: &Node, env: &Environment) -> Result<Operand, EvalError> {
    match node.tag.as_str() {
        "var" => eval_var(node, env).map(Operand::Value),
        "num" => eval_num(node).map(Operand::Value),
        _ => Ok(Operand::Skip),
    }
}

/// Evaluate an `add` node: fold the children left to right.
///
/// The running sum starts at `Int(0)`. `Int + Int` stays `Int`; any `Float`
/// operand promotes the sum to `Float` for the rest of the fold. Non-numeric
/// operands fail rather than coerce.
pub fn eval_add(node: &Node, env: &Environment) -> EvalResult {
    if node.children.is_empty() {
        return Err(add_without_children().with_span(node.span));
    }
    let mut sum = Value::int(0);
    for child in &node.children {
        match eval_operand(child, env)? {
            Operand::Value(value) => {
                sum = add_values(sum, value).map_err(|err| err.with_span(child.span))?;
            }
            Operand::Skip => {}
        }
    }
    Ok(sum)
}

/// Add one operand to the running sum with standard numeric promotion.
///
/// The sum is always numeric (it starts at `Int(0)` and only numeric values
/// get folded in), so only the operand needs a type check.
fn add_values(sum: Value, operand: Value) -> EvalResult {
    if !operand.is_numeric() {
        return Err(non_numeric_operand(&operand));
    }
    match (sum, operand) {
        (Value::Int(a), Value::Int(b)) => a
            .checked_add(b)
            .map(Value::int)
            .ok_or_else(integer_overflow),
        (Value::Int(a), Value::Float(b)) => Ok(Value::float(a as f64 + b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::float(a + b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::float(a + b)),
        // Unreachable: sum is numeric by construction, operand was checked.
        (sum, _) => Ok(sum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalErrorKind;
    use exml_ir::Span;
    use pretty_assertions::assert_eq;

    fn num(text: &str) -> Node {
        let mut node = Node::new("num", Span::DUMMY);
        node.text = Some(text.to_string());
        node
    }

    fn var(name: &str) -> Node {
        let mut node = Node::new("var", Span::DUMMY);
        node.attributes.insert("name".into(), name.into());
        node
    }

    fn add(children: Vec<Node>) -> Node {
        let mut node = Node::new("add", Span::DUMMY);
        node.children = children;
        node
    }

    #[test]
    fn num_narrows_integral_reals() {
        assert_eq!(eval_num(&num("4")), Ok(Value::int(4)));
        assert_eq!(eval_num(&num("4.0")), Ok(Value::int(4)));
        assert_eq!(eval_num(&num("1e3")), Ok(Value::int(1000)));
        assert_eq!(eval_num(&num("2.5")), Ok(Value::float(2.5)));
    }

    #[test]
    fn num_rejects_attributes_text_absence_and_junk() {
        let mut with_attr = num("4");
        with_attr.attributes.insert("x".into(), "1".into());
        assert_eq!(
            eval_num(&with_attr).unwrap_err().kind,
            EvalErrorKind::NumWithAttributes
        );

        let empty = Node::new("num", Span::DUMMY);
        assert_eq!(
            eval_num(&empty).unwrap_err().kind,
            EvalErrorKind::NumWithoutValue
        );

        assert_eq!(
            eval_num(&num("four")).unwrap_err().kind,
            EvalErrorKind::InvalidNumber
        );
    }

    #[test]
    fn var_resolves_through_the_environment() {
        let mut env = Environment::new();
        env.bind("x", Value::int(7));
        assert_eq!(eval_var(&var("x"), &env), Ok(Value::int(7)));
    }

    #[test]
    fn var_requires_exactly_the_name_attribute() {
        let env = Environment::new();

        let mut extra = var("x");
        extra.attributes.insert("type".into(), "int".into());
        assert_eq!(
            eval_var(&extra, &env).unwrap_err().kind,
            EvalErrorKind::InvalidVarAttributes
        );

        let bare = Node::new("var", Span::DUMMY);
        assert_eq!(
            eval_var(&bare, &env).unwrap_err().kind,
            EvalErrorKind::InvalidVarAttributes
        );
    }

    #[test]
    fn unbound_var_reports_its_name() {
        let env = Environment::new();
        let err = eval_var(&var("missing"), &env).unwrap_err();
        assert_eq!(err.to_string(), "var missing does not exist");
    }

    #[test]
    fn add_sums_literals_exactly() {
        let env = Environment::new();
        let node = add(vec![num("1"), num("2"), num("3")]);
        assert_eq!(eval_add(&node, &env), Ok(Value::int(6)));
    }

    #[test]
    fn add_stays_int_iff_all_operands_integral() {
        let env = Environment::new();
        assert_eq!(
            eval_add(&add(vec![num("1"), num("2.0")]), &env),
            Ok(Value::int(3))
        );
        assert_eq!(
            eval_add(&add(vec![num("1"), num("0.5")]), &env),
            Ok(Value::float(1.5))
        );
    }

    #[test]
    fn add_mixes_vars_and_literals() {
        let mut env = Environment::new();
        env.bind("x", Value::int(10));
        let node = add(vec![var("x"), num("5")]);
        assert_eq!(eval_add(&node, &env), Ok(Value::int(15)));
    }

    #[test]
    fn add_requires_children() {
        let env = Environment::new();
        assert_eq!(
            eval_add(&add(vec![]), &env).unwrap_err().kind,
            EvalErrorKind::AddWithoutChildren
        );
    }

    #[test]
    fn add_skips_unrecognized_child_tags() {
        let env = Environment::new();
        let node = add(vec![num("1"), Node::new("call", Span::DUMMY), num("2")]);
        assert_eq!(eval_add(&node, &env), Ok(Value::int(3)));
    }

    #[test]
    fn add_rejects_non_numeric_operands() {
        let mut env = Environment::new();
        env.bind("s", Value::string("hi"));
        let err = eval_add(&add(vec![var("s")]), &env).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::NonNumericOperand { type_name: "str" }
        );
    }

    #[test]
    fn add_overflow_is_reported_not_wrapped() {
        let mut env = Environment::new();
        env.bind("max", Value::int(i64::MAX));
        let err = eval_add(&add(vec![var("max"), num("1")]), &env).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::IntegerOverflow);
    }

    #[test]
    fn huge_integral_reals_stay_floats() {
        // Too large for i64, so no narrowing.
        assert_eq!(eval_num(&num("1e30")), Ok(Value::float(1e30)));
    }
}
