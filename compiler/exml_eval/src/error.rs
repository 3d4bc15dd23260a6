//! Evaluation error types.
//!
//! `EvalErrorKind` is the structured category; factory functions are the
//! public construction API and the `Display` impl produces the exact failure
//! texts the process boundary reports. Every kind belongs to one of two
//! classes:
//!
//! - [`ErrorClass::Syntax`] — malformed program structure, detected before
//!   the offending node's semantics run;
//! - [`ErrorClass::Runtime`] — well-formed structure whose evaluation cannot
//!   proceed.
//!
//! Both are fatal to the run; the distinction exists for reporting and
//! tests, not for recovery.

use std::fmt;

use exml_diagnostic::{Diagnostic, ErrorCode};
use exml_ir::{Span, TypeTag, Value};

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Whether a failure is structural (syntax) or evaluative (runtime).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    Syntax,
    Runtime,
}

/// Typed category for every evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Syntax
    /// `decl` without a `name` attribute.
    MissingDeclName,
    /// `decl` `type` attribute outside the closed type-name set.
    InvalidDeclType,
    /// Inference requested for raw text (no expression child to infer from).
    CannotInferWithoutChildren,
    /// `decl` with more than one child element.
    ExtraDeclChildren,
    /// `decl` child tag that is not a recognized operator.
    InvalidOperatorChild,
    /// `add` with no children.
    AddWithoutChildren,
    /// `var` with an attribute set other than exactly `name`.
    InvalidVarAttributes,
    /// `num` carrying attributes.
    NumWithAttributes,
    /// `num` with no text.
    NumWithoutValue,

    // Runtime
    /// Lookup of an unbound (or falsy-read-as-unbound) variable.
    UndefinedVariable { name: String },
    /// `num` text that does not parse as a number.
    InvalidNumber,
    /// `decl` text that does not parse as the declared type.
    InvalidCast { target: TypeTag },
    /// `usevars` attribute value outside `"true"`/`"false"`.
    InvalidUsevars,
    /// Interpolation placeholder naming an unknown variable.
    UnknownPlaceholder,
    /// Non-numeric operand in arithmetic.
    NonNumericOperand { type_name: &'static str },
    /// `i64` addition overflowed.
    IntegerOverflow,
}

impl EvalErrorKind {
    /// Syntax or runtime classification.
    pub fn class(&self) -> ErrorClass {
        match self {
            EvalErrorKind::MissingDeclName
            | EvalErrorKind::InvalidDeclType
            | EvalErrorKind::CannotInferWithoutChildren
            | EvalErrorKind::ExtraDeclChildren
            | EvalErrorKind::InvalidOperatorChild
            | EvalErrorKind::AddWithoutChildren
            | EvalErrorKind::InvalidVarAttributes
            | EvalErrorKind::NumWithAttributes
            | EvalErrorKind::NumWithoutValue => ErrorClass::Syntax,
            EvalErrorKind::UndefinedVariable { .. }
            | EvalErrorKind::InvalidNumber
            | EvalErrorKind::InvalidCast { .. }
            | EvalErrorKind::InvalidUsevars
            | EvalErrorKind::UnknownPlaceholder
            | EvalErrorKind::NonNumericOperand { .. }
            | EvalErrorKind::IntegerOverflow => ErrorClass::Runtime,
        }
    }

    /// Stable diagnostic code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::MissingDeclName => ErrorCode::E1001,
            EvalErrorKind::InvalidDeclType => ErrorCode::E1002,
            EvalErrorKind::CannotInferWithoutChildren => ErrorCode::E1003,
            EvalErrorKind::ExtraDeclChildren => ErrorCode::E1004,
            EvalErrorKind::InvalidOperatorChild => ErrorCode::E1005,
            EvalErrorKind::AddWithoutChildren => ErrorCode::E1006,
            EvalErrorKind::InvalidVarAttributes => ErrorCode::E1007,
            EvalErrorKind::NumWithAttributes => ErrorCode::E1008,
            EvalErrorKind::NumWithoutValue => ErrorCode::E1009,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E2001,
            EvalErrorKind::InvalidNumber => ErrorCode::E2002,
            EvalErrorKind::InvalidCast { .. } => ErrorCode::E2003,
            EvalErrorKind::InvalidUsevars => ErrorCode::E2004,
            EvalErrorKind::UnknownPlaceholder => ErrorCode::E2005,
            EvalErrorKind::NonNumericOperand { .. } => ErrorCode::E2006,
            EvalErrorKind::IntegerOverflow => ErrorCode::E2007,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::MissingDeclName => write!(f, "missing decl name"),
            EvalErrorKind::InvalidDeclType => write!(f, "invalid decl type"),
            EvalErrorKind::CannotInferWithoutChildren => {
                write!(f, "cannot infer without children")
            }
            EvalErrorKind::ExtraDeclChildren => {
                write!(f, "inferred decl contains more than one child")
            }
            EvalErrorKind::InvalidOperatorChild => write!(f, "invalid operator as decl child"),
            EvalErrorKind::AddWithoutChildren => write!(f, "add must have children"),
            EvalErrorKind::InvalidVarAttributes => write!(f, "invalid var attributes"),
            EvalErrorKind::NumWithAttributes => write!(f, "num cannot have attributes"),
            EvalErrorKind::NumWithoutValue => write!(f, "num must have a value"),
            EvalErrorKind::UndefinedVariable { name } => {
                write!(f, "var {name} does not exist")
            }
            EvalErrorKind::InvalidNumber => write!(f, "invalid number"),
            EvalErrorKind::InvalidCast { target } => {
                write!(f, "invalid decl value for type {target}")
            }
            EvalErrorKind::InvalidUsevars => write!(f, "invalid usevars value"),
            EvalErrorKind::UnknownPlaceholder => write!(f, "referenced unknown variable"),
            EvalErrorKind::NonNumericOperand { type_name } => {
                write!(f, "cannot add {type_name} value")
            }
            EvalErrorKind::IntegerOverflow => write!(f, "integer overflow in add"),
        }
    }
}

/// An evaluation failure, optionally located in the source document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error with no location.
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach the span of the offending node.
    ///
    /// Keeps an already-present span: errors are located where they arise,
    /// not where they propagate through.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    /// Syntax or runtime classification.
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// Convert to a reportable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.code()).with_message(self.to_string());
        match self.span {
            Some(span) => diag.with_span(span),
            None => diag,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

// Factory functions: the construction API the evaluator uses.

pub fn missing_decl_name() -> EvalError {
    EvalError::new(EvalErrorKind::MissingDeclName)
}

pub fn invalid_decl_type() -> EvalError {
    EvalError::new(EvalErrorKind::InvalidDeclType)
}

pub fn cannot_infer_without_children() -> EvalError {
    EvalError::new(EvalErrorKind::CannotInferWithoutChildren)
}

pub fn extra_decl_children() -> EvalError {
    EvalError::new(EvalErrorKind::ExtraDeclChildren)
}

pub fn invalid_operator_child() -> EvalError {
    EvalError::new(EvalErrorKind::InvalidOperatorChild)
}

pub fn add_without_children() -> EvalError {
    EvalError::new(EvalErrorKind::AddWithoutChildren)
}

pub fn invalid_var_attributes() -> EvalError {
    EvalError::new(EvalErrorKind::InvalidVarAttributes)
}

pub fn num_with_attributes() -> EvalError {
    EvalError::new(EvalErrorKind::NumWithAttributes)
}

pub fn num_without_value() -> EvalError {
    EvalError::new(EvalErrorKind::NumWithoutValue)
}

pub fn undefined_variable(name: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable { name: name.into() })
}

pub fn invalid_number() -> EvalError {
    EvalError::new(EvalErrorKind::InvalidNumber)
}

pub fn invalid_cast(target: TypeTag) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidCast { target })
}

pub fn invalid_usevars() -> EvalError {
    EvalError::new(EvalErrorKind::InvalidUsevars)
}

pub fn unknown_placeholder() -> EvalError {
    EvalError::new(EvalErrorKind::UnknownPlaceholder)
}

pub fn non_numeric_operand(value: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NonNumericOperand {
        type_name: value.type_name(),
    })
}

pub fn integer_overflow() -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow)
}
