//! Conversions between native values and encodings.
//!
//! These sit at the boundary only. Nothing in [`crate::encoding`] calls back
//! into this module.
use crate::{
    encoding::{
        ChurchBool, Encoding, List, Numeral,
        boolean::{make_false, make_true, select},
        list::{cons, head, is_nil, make_nil, tail},
        numeral::{make_zero, successor},
    },
    error::{ChurchError, EvalResult},
    runtime::{Function, Value},
};

/// Encodes `k` by applying `successor` to zero `k` times.
pub fn from_integer(k: i64) -> EvalResult<Numeral> {
    if k < 0 {
        log::debug!("rejecting negative numeral input {}", k);
        return Err(ChurchError::DomainError { value: k });
    }
    Ok((0..k).fold(make_zero(), |n, _| successor(&n)))
}

/// Decodes a numeral by counting with `+1` from `0`.
pub fn to_integer(n: &Numeral) -> EvalResult<i64> {
    let increment = Function::named("increment", |v| match v {
        Value::Integer(i) => Ok(Value::Integer(i + 1)),
        other => Err(ChurchError::type_error("Int", &other)),
    });
    match n.iterate(increment.into(), Value::Integer(0))? {
        Value::Integer(i) => Ok(i),
        other => Err(ChurchError::type_error("Int", &other)),
    }
}

pub fn from_bool(b: bool) -> ChurchBool {
    if b { make_true() } else { make_false() }
}

/// Decodes a boolean by letting it choose between two native markers.
pub fn to_bool(b: &ChurchBool) -> EvalResult<bool> {
    match select(b, Value::Integer(1), Value::Integer(0))? {
        Value::Integer(1) => Ok(true),
        Value::Integer(0) => Ok(false),
        other => Err(ChurchError::type_error("Boolean", &other)),
    }
}

/// Builds a list holding `items` in order.
pub fn from_sequence<I>(items: I) -> List
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: DoubleEndedIterator,
{
    items
        .into_iter()
        .rev()
        .fold(make_nil(), |tail, item| cons(item, &tail))
}

/// Collects the elements of a finite list. Does not return on a list that
/// never reaches nil.
pub fn to_sequence(list: &List) -> EvalResult<Vec<Value>> {
    let mut items = Vec::new();
    let mut current = list.clone();
    while !to_bool(&is_nil(&current)?)? {
        items.push(head(&current)?);
        current = tail(&current)?;
    }
    Ok(items)
}

/// A list of numerals, one per input.
pub fn from_integers(values: &[i64]) -> EvalResult<List> {
    let numerals = values
        .iter()
        .map(|&v| from_integer(v).map(Value::from))
        .collect::<EvalResult<Vec<_>>>()?;
    Ok(from_sequence(numerals))
}

/// Decodes a list whose elements are numerals.
pub fn to_integers(list: &List) -> EvalResult<Vec<i64>> {
    to_sequence(list)?
        .into_iter()
        .map(|item| to_integer(&Numeral::from_value(item)?))
        .collect()
}
