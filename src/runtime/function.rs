use std::{fmt, mem::ManuallyDrop, rc::Rc};

use crate::{error::EvalResult, runtime::value::Value};

type Body = dyn Fn(Value) -> EvalResult;

/// Remaining stack below which a call or drop moves to a fresh segment.
const STACK_RED_ZONE: usize = 128 * 1024;
/// Size of each segment allocated by [`stacker::maybe_grow`].
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// A single-argument function value.
///
/// The closure is shared through `Rc`, so cloning a `Function` never copies
/// its captures. The label only feeds `Debug`/`Display`.
///
/// Encoded data nests one closure per cons cell or successor layer, so both
/// application and teardown recurse as deep as the datum is long. Both run
/// under [`stacker::maybe_grow`]; depth is bounded by memory, not by the
/// thread's stack.
#[derive(Clone)]
pub struct Function {
    pub name: &'static str,
    body: ManuallyDrop<Rc<Body>>,
}

impl Function {
    pub fn new(body: impl Fn(Value) -> EvalResult + 'static) -> Self {
        Self::named("lambda", body)
    }

    pub fn named(name: &'static str, body: impl Fn(Value) -> EvalResult + 'static) -> Self {
        Self {
            name,
            body: ManuallyDrop::new(Rc::new(body)),
        }
    }

    /// Builds `λa. λb. body(a, b)`.
    pub fn curried2(
        name: &'static str,
        body: impl Fn(Value, Value) -> EvalResult + 'static,
    ) -> Self {
        let body = Rc::new(body);
        Self::named(name, move |a| {
            let body = Rc::clone(&body);
            Ok(Function::named(name, move |b| body(a.clone(), b)).into())
        })
    }

    pub fn call(&self, arg: Value) -> EvalResult {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || (self.body)(arg))
    }

    pub fn call2(&self, a: Value, b: Value) -> EvalResult {
        self.call(a)?.apply(b)
    }

    /// Whether both handles share one closure allocation.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&*self.body, &*other.body)
    }
}

impl Drop for Function {
    fn drop(&mut self) {
        // SAFETY: `body` is taken exactly once, here, and `self` is never
        // used again after `drop` returns.
        let body = unsafe { ManuallyDrop::take(&mut self.body) };
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, move || drop(body));
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name)
    }
}
