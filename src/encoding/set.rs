//! Sets of numerals encoded as membership predicates.
//!
//! A set is `λx. bool`. Union, intersection and difference combine
//! predicates pointwise and never enumerate. A predicate cannot list its own
//! members, so [`is_subset`] and [`set_equal`] take the candidate elements to
//! check.
use crate::{
    encoding::{
        ChurchBool, Encoding, List, Numeral,
        arithmetic::equal,
        boolean::{and, make_false, make_true, not, or},
        higher_order::fold,
    },
    error::EvalResult,
    runtime::Function,
};

encoding!(
    /// `λx. true` for members, `λx. false` otherwise.
    Set,
    "Set"
);

impl Set {
    fn test(&self, x: &Numeral) -> EvalResult<ChurchBool> {
        ChurchBool::from_value(self.0.call(x.to_value())?)
    }

    fn pointwise(
        name: &'static str,
        body: impl Fn(&Numeral) -> EvalResult<ChurchBool> + 'static,
    ) -> Set {
        Set(Function::named(name, move |x| {
            Ok(body(&Numeral::from_value(x)?)?.into())
        }))
    }
}

pub fn empty() -> Set {
    Set(Function::named("set_empty", |_| Ok(make_false().into())))
}

pub fn insert(set: &Set, element: &Numeral) -> Set {
    let (set, element) = (set.clone(), element.clone());
    Set::pointwise("set_insert", move |x| or(&equal(&element, x)?, &set.test(x)?))
}

pub fn remove(set: &Set, element: &Numeral) -> Set {
    let (set, element) = (set.clone(), element.clone());
    Set::pointwise("set_remove", move |x| {
        and(&not(&equal(&element, x)?)?, &set.test(x)?)
    })
}

pub fn member(set: &Set, element: &Numeral) -> EvalResult<ChurchBool> {
    set.test(element)
}

pub fn union(a: &Set, b: &Set) -> Set {
    let (a, b) = (a.clone(), b.clone());
    Set::pointwise("set_union", move |x| or(&a.test(x)?, &b.test(x)?))
}

pub fn intersection(a: &Set, b: &Set) -> Set {
    let (a, b) = (a.clone(), b.clone());
    Set::pointwise("set_intersection", move |x| and(&a.test(x)?, &b.test(x)?))
}

pub fn difference(a: &Set, b: &Set) -> Set {
    let (a, b) = (a.clone(), b.clone());
    Set::pointwise("set_difference", move |x| and(&a.test(x)?, &not(&b.test(x)?)?))
}

/// Whether every element of `candidates` that is in `a` is also in `b`.
pub fn is_subset(a: &Set, b: &Set, candidates: &List) -> EvalResult<ChurchBool> {
    let (a, b) = (a.clone(), b.clone());
    let check = Function::curried2("subset", move |acc, x| {
        let x = Numeral::from_value(x)?;
        let held = or(&not(&a.test(&x)?)?, &b.test(&x)?)?;
        Ok(and(&ChurchBool::from_value(acc)?, &held)?.into())
    });
    ChurchBool::from_value(fold(&check, make_true().into(), candidates)?)
}

/// Whether `a` and `b` agree on every element of `candidates`.
pub fn set_equal(a: &Set, b: &Set, candidates: &List) -> EvalResult<ChurchBool> {
    and(&is_subset(a, b, candidates)?, &is_subset(b, a, candidates)?)
}
