//! The named combinators the encodings are assembled from.
use std::rc::Rc;

use crate::{
    error::EvalResult,
    runtime::{Function, Value},
};

fn curried3(
    name: &'static str,
    body: impl Fn(Value, Value, Value) -> EvalResult + 'static,
) -> Function {
    let body = Rc::new(body);
    Function::curried2(name, move |x, y| {
        let body = Rc::clone(&body);
        Ok(Function::named(name, move |z| body(x.clone(), y.clone(), z)).into())
    })
}

/// I: `λx. x`
pub fn identity() -> Function {
    Function::named("I", Ok)
}

/// K: `λx. λy. x`
pub fn kestrel() -> Function {
    Function::curried2("K", |x, _| Ok(x))
}

/// KI: `λx. λy. y`
pub fn kite() -> Function {
    Function::curried2("KI", |_, y| Ok(y))
}

/// S: `λx. λy. λz. x z (y z)`
pub fn starling() -> Function {
    curried3("S", |x, y, z| {
        let yz = y.apply(z.clone())?;
        x.apply2(z, yz)
    })
}

/// B: `λx. λy. λz. x (y z)`
pub fn bluebird() -> Function {
    curried3("B", |x, y, z| x.apply(y.apply(z)?))
}

/// C: `λx. λy. λz. x z y`
pub fn cardinal() -> Function {
    curried3("C", |x, y, z| x.apply2(z, y))
}
