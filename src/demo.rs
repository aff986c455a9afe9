//! The canonical walkthrough: a handful of programs built from native input,
//! evaluated purely through the encodings, and decoded for display.
use std::fmt;

use serde::Serialize;

use crate::{
    convert::{from_integer, from_integers, to_integer, to_integers},
    encoding::{
        Encoding, Numeral,
        arithmetic::{add, add_fn, factorial_with_limit, is_even_fn, multiply, subtract},
        higher_order::{filter_with_limit, fold_with_limit, map_with_limit},
        pair::{first, make_pair, second},
    },
    error::{ChurchError, EvalResult},
    runtime::{Function, Value},
};

const LIST: [i64; 4] = [1, 2, 3, 4];
const FACTORIAL_INPUT: i64 = 5;

/// Decoded results of [`run_demo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub sum: i64,
    pub product: i64,
    pub difference: i64,
    pub saturated_difference: i64,
    pub pair: (i64, i64),
    pub list: Vec<i64>,
    pub doubled: Vec<i64>,
    pub evens: Vec<i64>,
    pub total: i64,
    pub factorial: i64,
}

fn num(k: i64) -> EvalResult<Numeral> {
    from_integer(k)
}

fn native(value: Value) -> EvalResult<i64> {
    value
        .as_integer()
        .ok_or_else(|| ChurchError::type_error("Int", &value))
}

/// `λn. n + n` over numerals.
pub fn double_fn() -> Function {
    Function::named("double", |n| {
        let n = Numeral::from_value(n)?;
        Ok(add(&n, &n).into())
    })
}

/// Runs every example. `recursion_limit` bounds each fixed point the examples unfold.
pub fn run_demo(recursion_limit: usize) -> EvalResult<DemoReport> {
    log::info!("running demo with recursion limit {}", recursion_limit);

    let sum = to_integer(&add(&num(1)?, &num(2)?))?;
    let product = to_integer(&multiply(&num(2)?, &num(3)?))?;
    let difference = to_integer(&subtract(&num(7)?, &num(3)?)?)?;
    let saturated_difference = to_integer(&subtract(&num(2)?, &num(5)?)?)?;

    let pair = make_pair(Value::Integer(1), Value::Integer(2));
    let pair = (native(first(&pair)?)?, native(second(&pair)?)?);

    let list = from_integers(&LIST)?;
    let doubled = to_integers(&map_with_limit(&double_fn(), &list, recursion_limit)?)?;
    let evens = to_integers(&filter_with_limit(&is_even_fn(), &list, recursion_limit)?)?;
    let total = fold_with_limit(&add_fn(), num(0)?.into(), &list, recursion_limit)?;
    let total = to_integer(&Numeral::from_value(total)?)?;

    let factorial = factorial_with_limit(&num(FACTORIAL_INPUT)?, recursion_limit)?;
    let factorial = to_integer(&factorial)?;

    Ok(DemoReport {
        sum,
        product,
        difference,
        saturated_difference,
        pair,
        list: LIST.to_vec(),
        doubled,
        evens,
        total,
        factorial,
    })
}

fn join(items: &[i64]) -> String {
    let items: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "1 + 2 = {}", self.sum)?;
        writeln!(f, "2 * 3 = {}", self.product)?;
        writeln!(f, "7 - 3 = {}", self.difference)?;
        writeln!(f, "2 - 5 = {}", self.saturated_difference)?;
        writeln!(f, "first(pair(1, 2)) = {}", self.pair.0)?;
        writeln!(f, "second(pair(1, 2)) = {}", self.pair.1)?;
        writeln!(f, "list = {}", join(&self.list))?;
        writeln!(f, "map(double) = {}", join(&self.doubled))?;
        writeln!(f, "filter(even) = {}", join(&self.evens))?;
        writeln!(f, "fold(add, 0) = {}", self.total)?;
        write!(f, "{}! = {}", FACTORIAL_INPUT, self.factorial)
    }
}
