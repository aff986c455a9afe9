//! Church encodings of booleans, numerals, pairs, lists and recursion, built
//! from nothing but single-argument function values.
//!
//! ```
//! use church::convert::{from_integer, from_integers, to_integer, to_integers};
//! use church::encoding::{arithmetic, higher_order};
//!
//! let three = arithmetic::add(&from_integer(1)?, &from_integer(2)?);
//! assert_eq!(to_integer(&three)?, 3);
//!
//! let evens = higher_order::filter(&arithmetic::is_even_fn(), &from_integers(&[1, 2, 3, 4])?)?;
//! assert_eq!(to_integers(&evens)?, vec![2, 4]);
//! # Ok::<(), church::ChurchError>(())
//! ```
pub mod convert;
pub mod demo;
pub mod encoding;
pub mod error;
pub mod runtime;

pub use encoding::recursion::{DEFAULT_RECURSION_LIMIT, fix, fix_with_limit};
pub use error::{ChurchError, EvalResult};
pub use runtime::{Function, Value};
