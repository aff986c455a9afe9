//! `map`, `filter` and the folds.
//!
//! Each one is a generator handed to the fixed point, so none of them calls
//! itself by name. All of them assume a finite, nil-terminated list and
//! unfold once per element; the `_with_limit` forms take the bound on that.
use crate::{
    encoding::{
        ChurchBool, Encoding, List,
        list::{cons, head, is_nil, make_nil, tail},
        pair::{Pair, first, make_pair, second},
        recursion::{DEFAULT_RECURSION_LIMIT, recursive_with_limit},
    },
    error::EvalResult,
    runtime::{Function, Value},
};

pub fn map(f: &Function, list: &List) -> EvalResult<List> {
    map_with_limit(f, list, DEFAULT_RECURSION_LIMIT)
}

pub fn map_with_limit(f: &Function, list: &List, limit: usize) -> EvalResult<List> {
    let f = f.clone();
    let step = recursive_with_limit("map", limit, move |recur, arg| {
        let list = List::from_value(arg)?;
        let (f, recur, cell) = (f.clone(), recur.clone(), list.clone());
        is_nil(&list)?.branch(
            || Ok(make_nil().into()),
            move || {
                let mapped = f.call(head(&cell)?)?;
                let rest = List::from_value(recur.call(tail(&cell)?.into())?)?;
                Ok(cons(mapped, &rest).into())
            },
        )
    })?;
    List::from_value(step.call(list.to_value())?)
}

/// Keeps the elements `pred` maps to a true [`ChurchBool`], in order.
pub fn filter(pred: &Function, list: &List) -> EvalResult<List> {
    filter_with_limit(pred, list, DEFAULT_RECURSION_LIMIT)
}

pub fn filter_with_limit(pred: &Function, list: &List, limit: usize) -> EvalResult<List> {
    let pred = pred.clone();
    let step = recursive_with_limit("filter", limit, move |recur, arg| {
        let list = List::from_value(arg)?;
        let (pred, recur, cell) = (pred.clone(), recur.clone(), list.clone());
        is_nil(&list)?.branch(
            || Ok(make_nil().into()),
            move || {
                let item = head(&cell)?;
                let rest = tail(&cell)?;
                let keep = ChurchBool::from_value(pred.call(item.clone())?)?;
                let (recur_keep, rest_keep) = (recur.clone(), rest.clone());
                let (recur_skip, rest_skip) = (recur.clone(), rest);
                keep.branch(
                    move || {
                        let kept = List::from_value(recur_keep.call(rest_keep.to_value())?)?;
                        Ok(cons(item.clone(), &kept).into())
                    },
                    move || recur_skip.call(rest_skip.to_value()),
                )
            },
        )
    })?;
    List::from_value(step.call(list.to_value())?)
}

/// Left fold: `combine(combine(seed, x0), x1) ...`, threading one accumulator
/// from head to tail.
///
/// `combine` is curried: it receives the accumulator, then the element.
pub fn fold(combine: &Function, seed: Value, list: &List) -> EvalResult {
    fold_with_limit(combine, seed, list, DEFAULT_RECURSION_LIMIT)
}

pub fn fold_with_limit(
    combine: &Function,
    seed: Value,
    list: &List,
    limit: usize,
) -> EvalResult {
    let combine = combine.clone();
    // The recursion argument is the pair (accumulator, remaining list).
    let step = recursive_with_limit("fold", limit, move |recur, arg| {
        let state = Pair::from_value(arg)?;
        let acc = first(&state)?;
        let list = List::from_value(second(&state)?)?;
        let (combine, recur) = (combine.clone(), recur.clone());
        let (cell, seen) = (list.clone(), acc.clone());
        is_nil(&list)?.branch(
            move || Ok(seen.clone()),
            move || {
                let next = combine.call2(acc.clone(), head(&cell)?)?;
                recur.call(make_pair(next, tail(&cell)?.into()).into())
            },
        )
    })?;
    step.call(make_pair(seed, list.to_value()).into())
}

/// Right fold: `combine(x0, combine(x1, ... combine(xn, seed)))`.
///
/// `combine` receives the element first, then the folded rest.
pub fn fold_right(combine: &Function, seed: Value, list: &List) -> EvalResult {
    fold_right_with_limit(combine, seed, list, DEFAULT_RECURSION_LIMIT)
}

pub fn fold_right_with_limit(
    combine: &Function,
    seed: Value,
    list: &List,
    limit: usize,
) -> EvalResult {
    let combine = combine.clone();
    let step = recursive_with_limit("fold_right", limit, move |recur, arg| {
        let list = List::from_value(arg)?;
        let (combine, recur) = (combine.clone(), recur.clone());
        let (cell, seed) = (list.clone(), seed.clone());
        is_nil(&list)?.branch(
            move || Ok(seed.clone()),
            move || {
                let folded = recur.call(tail(&cell)?.into())?;
                combine.call2(head(&cell)?, folded)
            },
        )
    })?;
    step.call(list.to_value())
}
