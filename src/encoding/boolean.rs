use crate::{
    encoding::{
        Encoding,
        combinators::{identity, kestrel, kite},
    },
    error::EvalResult,
    runtime::{Function, Value},
};

encoding!(
    /// A two-argument selector: `λa. λb. a` for true, `λa. λb. b` for false.
    ChurchBool,
    "Boolean"
);

pub fn make_true() -> ChurchBool {
    ChurchBool(kestrel())
}

pub fn make_false() -> ChurchBool {
    ChurchBool(kite())
}

/// Applies `cond` to both arms and returns the one it picks.
///
/// Both arms are already evaluated; use [`ChurchBool::branch`] when the
/// unchosen arm must not run.
pub fn select(cond: &ChurchBool, if_true: Value, if_false: Value) -> EvalResult {
    cond.0.call2(if_true, if_false)
}

pub fn and(p: &ChurchBool, q: &ChurchBool) -> EvalResult<ChurchBool> {
    ChurchBool::from_value(select(p, q.to_value(), p.to_value())?)
}

pub fn or(p: &ChurchBool, q: &ChurchBool) -> EvalResult<ChurchBool> {
    ChurchBool::from_value(select(p, p.to_value(), q.to_value())?)
}

pub fn not(p: &ChurchBool) -> EvalResult<ChurchBool> {
    ChurchBool::from_value(select(p, make_false().into(), make_true().into())?)
}

pub fn xor(p: &ChurchBool, q: &ChurchBool) -> EvalResult<ChurchBool> {
    ChurchBool::from_value(select(p, not(q)?.into(), q.to_value())?)
}

fn thunk(body: impl Fn() -> EvalResult + 'static) -> Function {
    Function::named("thunk", move |_| body())
}

impl ChurchBool {
    /// Conditional for a strict host.
    ///
    /// Each arm is wrapped in a thunk, the boolean selects one thunk, and only
    /// that thunk is forced. Recursive definitions depend on this: selecting
    /// between two already-evaluated recursive calls would never terminate.
    pub fn branch(
        &self,
        then: impl Fn() -> EvalResult + 'static,
        otherwise: impl Fn() -> EvalResult + 'static,
    ) -> EvalResult {
        let chosen = select(self, thunk(then).into(), thunk(otherwise).into())?;
        chosen.apply(identity().into())
    }
}
