use crate::{
    encoding::{
        ChurchBool, Encoding,
        boolean::{make_false, make_true, not},
        list::make_nil,
        pair::{Pair, first, make_pair, second},
    },
    error::EvalResult,
    runtime::{Function, Value},
};

encoding!(
    /// An optional value: `pair(true, x)` or `pair(false, nil)`.
    Maybe,
    "Maybe"
);

impl Maybe {
    fn as_pair(&self) -> Pair {
        Pair::from_function(self.0.clone())
    }
}

pub fn some(value: Value) -> Maybe {
    Maybe(make_pair(make_true().into(), value).as_function().clone())
}

pub fn none() -> Maybe {
    Maybe(make_pair(make_false().into(), make_nil().into()).as_function().clone())
}

pub fn is_some(maybe: &Maybe) -> EvalResult<ChurchBool> {
    ChurchBool::from_value(first(&maybe.as_pair())?)
}

pub fn is_none(maybe: &Maybe) -> EvalResult<ChurchBool> {
    not(&is_some(maybe)?)
}

/// Applies `f` to the payload of a `some`; a `none` stays `none`.
pub fn map_maybe(f: &Function, maybe: &Maybe) -> EvalResult<Maybe> {
    let (f, pair) = (f.clone(), maybe.as_pair());
    let mapped = is_some(maybe)?.branch(
        move || Ok(some(f.call(second(&pair)?)?).into()),
        || Ok(none().into()),
    )?;
    Maybe::from_value(mapped)
}

pub fn unwrap_or(maybe: &Maybe, default: Value) -> EvalResult {
    let pair = maybe.as_pair();
    is_some(maybe)?.branch(move || second(&pair), move || Ok(default.clone()))
}
