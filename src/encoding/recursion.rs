//! Recursion without self-reference.
//!
//! The fixed point is the call-by-value `Z` combinator:
//!
//! ```text
//! Z = λf. (λx. f (λv. x x v)) (λx. f (λv. x x v))
//! ```
//!
//! The plain `Y` combinator evaluates `x x` while it is still being built and
//! never returns under Rust's eager application. Hiding the self-application
//! behind `λv.` defers each unfolding until the recursive function is
//! actually called with an argument.
use std::{cell::Cell, rc::Rc};

use crate::{
    error::{ChurchError, EvalResult},
    runtime::{Function, Value},
};

/// Nested unfoldings allowed by [`fix`] before it reports
/// [`ChurchError::RecursionLimitExceeded`].
///
/// Application grows the stack on demand, so this bounds runaway recursion
/// rather than protecting the thread's stack. Each list or numeral operation
/// built on [`fix`] unfolds once per element, so it also caps input length.
pub const DEFAULT_RECURSION_LIMIT: usize = 100_000;

/// Returns `r` such that `r(x)` behaves as `generator(r)(x)`.
///
/// Uses [`DEFAULT_RECURSION_LIMIT`].
pub fn fix(generator: &Function) -> EvalResult<Function> {
    fix_with_limit(generator, DEFAULT_RECURSION_LIMIT)
}

/// [`fix`] with an explicit bound on nested unfoldings.
///
/// Only unfoldings that are still on the stack count, so a recursion that
/// returns before recursing again never accumulates depth.
pub fn fix_with_limit(generator: &Function, limit: usize) -> EvalResult<Function> {
    let depth = Rc::new(Cell::new(0usize));
    let generator = generator.clone();

    let half = Function::named("fix", move |x: Value| {
        let depth = Rc::clone(&depth);
        let delayed = Function::named("unfold", move |v| {
            let _guard = DepthGuard::enter(&depth, limit)?;
            x.apply(x.clone())?.apply(v)
        });
        generator.call(delayed.into())
    });

    match half.call(half.clone().into())? {
        Value::Function(func) => Ok(func),
        other => Err(ChurchError::type_error("Function", &other)),
    }
}

/// Ties the knot for a Rust closure that receives its own recursive handle.
///
/// `body(recur, arg)` must only call `recur` for the recursive case.
pub fn recursive(
    name: &'static str,
    body: impl Fn(&Function, Value) -> EvalResult + 'static,
) -> EvalResult<Function> {
    recursive_with_limit(name, DEFAULT_RECURSION_LIMIT, body)
}

pub fn recursive_with_limit(
    name: &'static str,
    limit: usize,
    body: impl Fn(&Function, Value) -> EvalResult + 'static,
) -> EvalResult<Function> {
    let body = Rc::new(body);
    let generator = Function::named("generator", move |recur| {
        let recur = match recur {
            Value::Function(func) => func,
            other => return Err(ChurchError::type_error("Function", &other)),
        };
        let body = Rc::clone(&body);
        Ok(Function::named(name, move |arg| body(&recur, arg)).into())
    });
    fix_with_limit(&generator, limit)
}

struct DepthGuard<'a> {
    depth: &'a Cell<usize>,
}

impl<'a> DepthGuard<'a> {
    fn enter(depth: &'a Cell<usize>, limit: usize) -> EvalResult<Self> {
        let next = depth.get() + 1;
        if next > limit {
            log::warn!("fixed point exceeded {} nested unfoldings", limit);
            return Err(ChurchError::RecursionLimitExceeded { limit });
        }
        depth.set(next);
        log::trace!("unfold depth {}", next);
        Ok(Self { depth })
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}
