//! Finite maps keyed by numerals, encoded as lookup functions.
//!
//! A dictionary is `λkey. maybe`. Inserting wraps the previous dictionary in
//! a closure that answers for one key and defers every other key, so updates
//! share the old dictionary instead of copying it. Keys are compared with
//! [`equal`].
use crate::{
    encoding::{
        ChurchBool, Encoding, Maybe, Numeral,
        arithmetic::equal,
        maybe::{is_some, none, some},
    },
    error::EvalResult,
    runtime::{Function, Value},
};

encoding!(
    /// `λkey. some(value)` for bound keys, `λkey. none` otherwise.
    Dict,
    "Dict"
);

pub fn empty() -> Dict {
    Dict(Function::named("dict_empty", |_| Ok(none().into())))
}

/// Binds `key` to `value`. A later insert of the same key shadows this one.
pub fn insert(dict: &Dict, key: &Numeral, value: Value) -> Dict {
    let (older, key) = (dict.clone(), key.clone());
    Dict(Function::named("dict_insert", move |asked_key| {
        let asked = Numeral::from_value(asked_key.clone())?;
        let (value, older) = (value.clone(), older.clone());
        equal(&key, &asked)?.branch(
            move || Ok(some(value.clone()).into()),
            move || older.0.call(asked_key.clone()),
        )
    }))
}

/// Unbinds `key`, including every shadowed binding of it.
pub fn remove(dict: &Dict, key: &Numeral) -> Dict {
    let (older, key) = (dict.clone(), key.clone());
    Dict(Function::named("dict_remove", move |asked_key| {
        let asked = Numeral::from_value(asked_key.clone())?;
        let older = older.clone();
        equal(&key, &asked)?.branch(
            || Ok(none().into()),
            move || older.0.call(asked_key.clone()),
        )
    }))
}

pub fn lookup(dict: &Dict, key: &Numeral) -> EvalResult<Maybe> {
    Maybe::from_value(dict.0.call(key.to_value())?)
}

pub fn contains_key(dict: &Dict, key: &Numeral) -> EvalResult<ChurchBool> {
    is_some(&lookup(dict, key)?)
}
