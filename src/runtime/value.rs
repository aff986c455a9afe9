use std::{fmt, rc::Rc};

use crate::{
    error::{ChurchError, EvalResult},
    runtime::function::Function,
};

/// Runtime value flowing through every encoding.
///
/// ## Representation Model
///
/// The encodings only ever build and apply [`Function`]s. The remaining
/// variants are opaque payloads that callers hand in at the boundary (list
/// elements, pair components, numeral decoding seeds); the algebra stores and
/// returns them but never looks inside.
///
/// ### No-Cycle Invariant
///
/// Functions capture values through `Rc`, so value graphs must stay acyclic:
/// - a closure may capture values, but those values never capture the closure
/// - there is no mutable cell that could create a back-edge after construction
/// - the fixed point is reached by self-application, not by an `Rc` pointing
///   at itself
///
/// Cloning any variant is O(1).
#[derive(Debug, Clone)]
pub enum Value {
    /// Native 64-bit integer payload.
    Integer(i64),
    /// Native UTF-8 string payload.
    String(Rc<str>),
    /// Single-argument function value.
    Function(Function),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::Function(func) => write!(f, "{}", func),
        }
    }
}

/// Payloads compare structurally; functions compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Value {
    /// Returns the runtime label used in error messages.
    ///
    /// These labels are user-visible and are expected to remain stable.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Int",
            Value::String(_) => "String",
            Value::Function(_) => "Function",
        }
    }

    /// Applies this value to `arg`.
    ///
    /// Only [`Value::Function`] can be applied; payloads fail with
    /// [`ChurchError::NotAFunction`].
    pub fn apply(&self, arg: Value) -> EvalResult {
        match self {
            Value::Function(func) => func.call(arg),
            other => Err(ChurchError::NotAFunction {
                type_name: other.type_name(),
            }),
        }
    }

    /// Curried application of two arguments: `self(a)(b)`.
    pub fn apply2(&self, a: Value, b: Value) -> EvalResult {
        self.apply(a)?.apply(b)
    }

    /// Borrows the function inside, if any.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}
