//! Arithmetic and comparison on numerals.
//!
//! Numerals have no decrement, so everything that subtracts is built on
//! [`predecessor`], which rebuilds the number from below with a shifting pair.
//! Subtraction saturates at zero and comparisons are derived from it.
use crate::{
    encoding::{
        ChurchBool, Encoding, Numeral,
        boolean::{and, make_false, make_true, not, or, select},
        numeral::{make_zero, successor},
        pair::{Pair, first, make_pair, second},
        recursion::{DEFAULT_RECURSION_LIMIT, fix_with_limit, recursive_with_limit},
    },
    error::EvalResult,
    runtime::Function,
};

pub fn add(m: &Numeral, n: &Numeral) -> Numeral {
    let (m, n) = (m.clone(), n.clone());
    Numeral::from_function(Function::curried2("add", move |step, seed| {
        let inner = n.iterate(step.clone(), seed)?;
        m.iterate(step, inner)
    }))
}

pub fn multiply(m: &Numeral, n: &Numeral) -> Numeral {
    let (m, n) = (m.clone(), n.clone());
    Numeral::from_function(Function::named("mul", move |step| {
        m.as_function().call(n.as_function().call(step)?)
    }))
}

/// `m` raised to `n`: applying `n` to `m` composes `m` with itself `n` times.
pub fn power(m: &Numeral, n: &Numeral) -> EvalResult<Numeral> {
    Numeral::from_value(n.as_function().call(m.to_value())?)
}

pub fn is_zero(n: &Numeral) -> EvalResult<ChurchBool> {
    let always_false = Function::named("const_false", |_| Ok(make_false().into()));
    ChurchBool::from_value(n.iterate(always_false.into(), make_true().into())?)
}

/// Parity without subtraction: flip a boolean once per count.
pub fn is_even(n: &Numeral) -> EvalResult<ChurchBool> {
    let flip = Function::named("not", |b| Ok(not(&ChurchBool::from_value(b)?)?.into()));
    ChurchBool::from_value(n.iterate(flip.into(), make_true().into())?)
}

/// `n - 1`, saturating at zero.
///
/// Starts from `(0, 0)` and applies `(a, b) -> (b, b + 1)` `n` times; the
/// first slot then trails the count by one.
pub fn predecessor(n: &Numeral) -> EvalResult<Numeral> {
    let shift = Function::named("shift", |p| {
        let b = Numeral::from_value(second(&Pair::from_value(p)?)?)?;
        Ok(make_pair(b.to_value(), successor(&b).into()).into())
    });
    let start = make_pair(make_zero().into(), make_zero().into());
    let shifted = Pair::from_value(n.iterate(shift.into(), start.into())?)?;
    Numeral::from_value(first(&shifted)?)
}

/// `m - n`, saturating at zero: `predecessor` applied to `m`, `n` times.
pub fn subtract(m: &Numeral, n: &Numeral) -> EvalResult<Numeral> {
    Numeral::from_value(n.iterate(predecessor_fn().into(), m.to_value())?)
}

pub fn less_or_equal(m: &Numeral, n: &Numeral) -> EvalResult<ChurchBool> {
    is_zero(&subtract(m, n)?)
}

pub fn equal(m: &Numeral, n: &Numeral) -> EvalResult<ChurchBool> {
    and(&less_or_equal(m, n)?, &less_or_equal(n, m)?)
}

pub fn less_than(m: &Numeral, n: &Numeral) -> EvalResult<ChurchBool> {
    not(&less_or_equal(n, m)?)
}

pub fn greater_than(m: &Numeral, n: &Numeral) -> EvalResult<ChurchBool> {
    less_than(n, m)
}

pub fn greater_or_equal(m: &Numeral, n: &Numeral) -> EvalResult<ChurchBool> {
    less_or_equal(n, m)
}

pub fn min(m: &Numeral, n: &Numeral) -> EvalResult<Numeral> {
    Numeral::from_value(select(&less_than(m, n)?, m.to_value(), n.to_value())?)
}

pub fn max(m: &Numeral, n: &Numeral) -> EvalResult<Numeral> {
    Numeral::from_value(select(&less_than(m, n)?, n.to_value(), m.to_value())?)
}

/// Quotient by repeated subtraction. Dividing by zero yields zero.
pub fn divide(m: &Numeral, n: &Numeral) -> EvalResult<Numeral> {
    divide_with_limit(m, n, DEFAULT_RECURSION_LIMIT)
}

/// [`divide`] unfolds once per subtraction, i.e. once per unit of quotient.
pub fn divide_with_limit(m: &Numeral, n: &Numeral, limit: usize) -> EvalResult<Numeral> {
    let divisor = n.clone();
    let step = recursive_with_limit("div", limit, move |recur, dividend| {
        let dividend = Numeral::from_value(dividend)?;
        let (d, r) = (divisor.clone(), recur.clone());
        below_or_by_zero(&dividend, &divisor)?.branch(
            || Ok(make_zero().into()),
            move || {
                let rest = subtract(&dividend, &d)?;
                let quotient = Numeral::from_value(r.call(rest.into())?)?;
                Ok(successor(&quotient).into())
            },
        )
    })?;
    Numeral::from_value(step.call(m.to_value())?)
}

/// Remainder by repeated subtraction. The remainder of a division by zero is
/// zero.
pub fn remainder(m: &Numeral, n: &Numeral) -> EvalResult<Numeral> {
    remainder_with_limit(m, n, DEFAULT_RECURSION_LIMIT)
}

pub fn remainder_with_limit(m: &Numeral, n: &Numeral, limit: usize) -> EvalResult<Numeral> {
    let divisor = n.clone();
    let step = recursive_with_limit("rem", limit, move |recur, dividend| {
        let dividend = Numeral::from_value(dividend)?;
        let (d, r) = (divisor.clone(), recur.clone());
        let zero_divisor = is_zero(&divisor)?;
        let small = less_than(&dividend, &divisor)?;
        let result = dividend.to_value();
        zero_divisor.branch(
            || Ok(make_zero().into()),
            move || {
                let (dividend, d, r) = (dividend.clone(), d.clone(), r.clone());
                let result = result.clone();
                small.branch(
                    move || Ok(result.clone()),
                    move || r.call(subtract(&dividend, &d)?.into()),
                )
            },
        )
    })?;
    Numeral::from_value(step.call(m.to_value())?)
}

/// `is_zero(n) or m < n`, the stop condition of [`divide`].
fn below_or_by_zero(m: &Numeral, n: &Numeral) -> EvalResult<ChurchBool> {
    or(&is_zero(n)?, &less_than(m, n)?)
}

/// The factorial function, built through [`fix_with_limit`].
pub fn factorial_fn(limit: usize) -> EvalResult<Function> {
    let generator = Function::named("factorial", |recur| {
        Ok(Function::named("factorial", move |n| {
            let n = Numeral::from_value(n)?;
            let (cell, recur) = (n.clone(), recur.clone());
            is_zero(&n)?.branch(
                || Ok(successor(&make_zero()).into()),
                move || {
                    let below = recur.apply(predecessor(&cell)?.into())?;
                    Ok(multiply(&cell, &Numeral::from_value(below)?).into())
                },
            )
        })
        .into())
    });
    fix_with_limit(&generator, limit)
}

pub fn factorial(n: &Numeral) -> EvalResult<Numeral> {
    factorial_with_limit(n, DEFAULT_RECURSION_LIMIT)
}

pub fn factorial_with_limit(n: &Numeral, limit: usize) -> EvalResult<Numeral> {
    Numeral::from_value(factorial_fn(limit)?.call(n.to_value())?)
}

/// Curried [`add`] as a function value, e.g. for folding.
pub fn add_fn() -> Function {
    Function::curried2("add", |m, n| {
        Ok(add(&Numeral::from_value(m)?, &Numeral::from_value(n)?).into())
    })
}

pub fn multiply_fn() -> Function {
    Function::curried2("mul", |m, n| {
        Ok(multiply(&Numeral::from_value(m)?, &Numeral::from_value(n)?).into())
    })
}

pub fn predecessor_fn() -> Function {
    Function::named("pred", |n| Ok(predecessor(&Numeral::from_value(n)?)?.into()))
}

pub fn is_zero_fn() -> Function {
    Function::named("is_zero", |n| Ok(is_zero(&Numeral::from_value(n)?)?.into()))
}

pub fn is_even_fn() -> Function {
    Function::named("is_even", |n| Ok(is_even(&Numeral::from_value(n)?)?.into()))
}
