//! Untyped runtime carrier for the encodings.
//!
//! # No-Cycle Invariant
//! Every encoded datum is a [`Function`] closing over other values through
//! `Rc`. Values are immutable after construction, so the reachable graph is a
//! DAG:
//! - closures capture values, captured values never reference the closure
//! - recursion is tied by self-application inside `fix`, which passes a
//!   closure to itself as an argument instead of storing a back-edge
//!
//! Introducing a cycle would leak under reference counting.
pub mod function;
pub mod value;

pub use function::Function;
pub use value::Value;
