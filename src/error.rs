use thiserror::Error;

use crate::runtime::value::Value;

/// Result of applying or decoding an encoded value.
pub type EvalResult<T = Value> = Result<T, ChurchError>;

/// Failures raised at the point an encoding is misused.
///
/// The algebra itself is total; every variant here is triggered either at the
/// native boundary or by a caller handing the engine something of the wrong
/// shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChurchError {
    /// A native integer that has no numeral counterpart.
    #[error("domain error: cannot encode {value} as a numeral")]
    DomainError {
        /// The rejected input.
        value: i64,
    },

    /// `head`, `tail` or an index walked past the end of a list.
    #[error("empty list: {operation} of nil")]
    EmptyList {
        /// Operation that hit the sentinel.
        operation: &'static str,
    },

    /// A fixed point nested deeper than its configured limit.
    #[error("recursion limit exceeded: more than {limit} nested unfoldings")]
    RecursionLimitExceeded {
        /// Configured limit.
        limit: usize,
    },

    /// A native payload was applied as if it were a function.
    #[error("not a function: cannot apply {type_name}")]
    NotAFunction {
        /// Runtime label of the payload.
        type_name: &'static str,
    },

    /// A value did not have the shape a caller asked for.
    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        /// Shape the caller asked for.
        expected: &'static str,
        /// Runtime label of what was found.
        got: &'static str,
    },
}

impl ChurchError {
    pub(crate) fn type_error(expected: &'static str, got: &Value) -> Self {
        ChurchError::TypeError {
            expected,
            got: got.type_name(),
        }
    }

    pub(crate) fn empty_list(operation: &'static str) -> Self {
        ChurchError::EmptyList { operation }
    }
}
