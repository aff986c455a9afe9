use crate::{
    encoding::Encoding,
    error::EvalResult,
    runtime::{Function, Value},
};

encoding!(
    /// `λstep. λseed. step(step(...(seed)))` with `step` applied `n` times.
    Numeral,
    "Numeral"
);

impl Numeral {
    /// Applies `step` to `seed` as many times as this numeral counts.
    pub fn iterate(&self, step: Value, seed: Value) -> EvalResult {
        self.0.call2(step, seed)
    }
}

pub fn make_zero() -> Numeral {
    Numeral(Function::curried2("zero", |_step, seed| Ok(seed)))
}

pub fn successor(n: &Numeral) -> Numeral {
    let n = n.clone();
    Numeral(Function::curried2("succ", move |step, seed| {
        let inner = n.iterate(step.clone(), seed)?;
        step.apply(inner)
    }))
}

/// [`successor`] as a function value, for use as a step or list callback.
pub fn successor_fn() -> Function {
    Function::named("succ", |n| Ok(successor(&Numeral::from_value(n)?).into()))
}
