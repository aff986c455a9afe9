//! Church encodings built purely from single-argument functions.
//!
//! Every datum here is a [`Function`]; the wrapper types only exist so the
//! compiler keeps a numeral from being passed where a boolean is expected.
//! Nothing in this module inspects native payloads or uses native control
//! flow to decide an encoded question. Conversions to and from native values
//! live in [`crate::convert`].
use crate::{
    error::{ChurchError, EvalResult},
    runtime::{Function, Value},
};

/// Shared behaviour of the nominal wrappers around [`Function`].
pub trait Encoding: Sized {
    /// Label reported when a value cannot be lifted into this encoding.
    const KIND: &'static str;

    /// Wraps a function without checking its shape.
    ///
    /// Shape is a usage convention, not something a closure can be asked
    /// about, so the caller vouches for it.
    fn from_function(func: Function) -> Self;

    fn as_function(&self) -> &Function;

    /// Lifts an untyped value, rejecting native payloads.
    fn from_value(value: Value) -> EvalResult<Self> {
        match value {
            Value::Function(func) => Ok(Self::from_function(func)),
            other => Err(ChurchError::type_error(Self::KIND, &other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Function(self.as_function().clone())
    }
}

macro_rules! encoding {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name($crate::runtime::Function);

        impl $crate::encoding::Encoding for $name {
            const KIND: &'static str = $kind;

            fn from_function(func: $crate::runtime::Function) -> Self {
                $name(func)
            }

            fn as_function(&self) -> &$crate::runtime::Function {
                &self.0
            }
        }

        impl From<$name> for $crate::runtime::Value {
            fn from(encoded: $name) -> $crate::runtime::Value {
                $crate::runtime::Value::Function(encoded.0)
            }
        }
    };
}

pub mod arithmetic;
pub mod boolean;
pub mod combinators;
pub mod dict;
pub mod higher_order;
pub mod list;
pub mod list_ops;
pub mod maybe;
pub mod numeral;
pub mod pair;
pub mod recursion;
pub mod set;
pub mod tree;

pub use boolean::ChurchBool;
pub use dict::Dict;
pub use list::List;
pub use maybe::Maybe;
pub use numeral::Numeral;
pub use pair::Pair;
pub use set::Set;
pub use tree::Tree;
