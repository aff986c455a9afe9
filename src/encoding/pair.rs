use crate::{
    encoding::combinators::{kestrel, kite},
    error::EvalResult,
    runtime::{Function, Value},
};

encoding!(
    /// `λselector. selector a b` for a fixed `a` and `b`.
    Pair,
    "Pair"
);

pub fn make_pair(a: Value, b: Value) -> Pair {
    Pair(Function::named("pair", move |selector| {
        selector.apply2(a.clone(), b.clone())
    }))
}

pub fn first(pair: &Pair) -> EvalResult {
    pair.0.call(kestrel().into())
}

pub fn second(pair: &Pair) -> EvalResult {
    pair.0.call(kite().into())
}
