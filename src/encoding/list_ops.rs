//! Derived list operations: length, append, reverse, take, drop, slice, nth.
//!
//! `drop` and `nth` iterate a numeral and never unfold a fixed point; the
//! rest do, once per element, and have `_with_limit` forms.
use crate::{
    encoding::{
        Encoding, List, Numeral,
        arithmetic::{is_zero, predecessor, subtract},
        boolean::or,
        higher_order::fold_with_limit,
        list::{cons, head, is_nil, make_nil, tail},
        numeral::{make_zero, successor},
        pair::{Pair, first, make_pair, second},
        recursion::{DEFAULT_RECURSION_LIMIT, recursive_with_limit},
    },
    error::{ChurchError, EvalResult},
    runtime::Function,
};

pub fn length(list: &List) -> EvalResult<Numeral> {
    length_with_limit(list, DEFAULT_RECURSION_LIMIT)
}

pub fn length_with_limit(list: &List, limit: usize) -> EvalResult<Numeral> {
    let count = Function::curried2("count", |acc, _item| {
        Ok(successor(&Numeral::from_value(acc)?).into())
    });
    Numeral::from_value(fold_with_limit(&count, make_zero().into(), list, limit)?)
}

pub fn reverse(list: &List) -> EvalResult<List> {
    reverse_with_limit(list, DEFAULT_RECURSION_LIMIT)
}

pub fn reverse_with_limit(list: &List, limit: usize) -> EvalResult<List> {
    let push = Function::curried2("push", |acc, item| {
        Ok(cons(item, &List::from_value(acc)?).into())
    });
    List::from_value(fold_with_limit(&push, make_nil().into(), list, limit)?)
}

/// `front` followed by `back`. `back` is shared, not copied.
pub fn append(front: &List, back: &List) -> EvalResult<List> {
    append_with_limit(front, back, DEFAULT_RECURSION_LIMIT)
}

pub fn append_with_limit(front: &List, back: &List, limit: usize) -> EvalResult<List> {
    let back = back.clone();
    let step = recursive_with_limit("append", limit, move |recur, arg| {
        let list = List::from_value(arg)?;
        let (back, recur, cell) = (back.clone(), recur.clone(), list.clone());
        is_nil(&list)?.branch(
            move || Ok(back.to_value()),
            move || {
                let rest = List::from_value(recur.call(tail(&cell)?.into())?)?;
                Ok(cons(head(&cell)?, &rest).into())
            },
        )
    })?;
    List::from_value(step.call(front.to_value())?)
}

/// Drops the first `n` elements; dropping past the end yields nil.
pub fn drop(list: &List, n: &Numeral) -> EvalResult<List> {
    let step = Function::named("drop_one", |arg| {
        let list = List::from_value(arg)?;
        let (stay, cell) = (list.clone(), list.clone());
        is_nil(&list)?.branch(
            move || Ok(stay.to_value()),
            move || Ok(tail(&cell)?.into()),
        )
    });
    List::from_value(n.iterate(step.into(), list.to_value())?)
}

/// The first `n` elements, or the whole list if it is shorter.
pub fn take(list: &List, n: &Numeral) -> EvalResult<List> {
    take_with_limit(list, n, DEFAULT_RECURSION_LIMIT)
}

pub fn take_with_limit(list: &List, n: &Numeral, limit: usize) -> EvalResult<List> {
    // The recursion argument is the pair (remaining list, remaining count).
    let step = recursive_with_limit("take", limit, |recur, arg| {
        let state = Pair::from_value(arg)?;
        let list = List::from_value(first(&state)?)?;
        let count = Numeral::from_value(second(&state)?)?;
        let done = or(&is_nil(&list)?, &is_zero(&count)?)?;
        let recur = recur.clone();
        done.branch(
            || Ok(make_nil().into()),
            move || {
                let next = make_pair(tail(&list)?.into(), predecessor(&count)?.into());
                let rest = List::from_value(recur.call(next.into())?)?;
                Ok(cons(head(&list)?, &rest).into())
            },
        )
    })?;
    List::from_value(step.call(make_pair(list.to_value(), n.to_value()).into())?)
}

/// Elements from index `start` up to, not including, `end`.
///
/// Out-of-range bounds clamp to the list; `end <= start` yields nil.
pub fn slice(list: &List, start: &Numeral, end: &Numeral) -> EvalResult<List> {
    slice_with_limit(list, start, end, DEFAULT_RECURSION_LIMIT)
}

pub fn slice_with_limit(
    list: &List,
    start: &Numeral,
    end: &Numeral,
    limit: usize,
) -> EvalResult<List> {
    take_with_limit(&drop(list, start)?, &subtract(end, start)?, limit)
}

/// Element at zero-based index `n`; fails with [`ChurchError::EmptyList`]
/// when the list is too short.
pub fn nth(list: &List, n: &Numeral) -> EvalResult {
    let rest = drop(list, n)?;
    let cell = rest.clone();
    is_nil(&rest)?.branch(
        || Err(ChurchError::empty_list("nth")),
        move || head(&cell),
    )
}
