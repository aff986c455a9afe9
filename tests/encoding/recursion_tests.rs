use church::convert::{
    from_integer, from_integers, from_sequence, to_integer, to_integers, to_sequence,
};
use church::encoding::arithmetic::{factorial, factorial_fn, factorial_with_limit};
use church::encoding::higher_order::{fold, map, map_with_limit};
use church::encoding::recursion::recursive_with_limit;
use church::encoding::{Encoding, Numeral};
use church::{ChurchError, DEFAULT_RECURSION_LIMIT, Function, Value, fix};

#[test]
fn factorial_table() {
    let expected = [1, 1, 2, 6, 24, 120, 720];
    for (n, want) in expected.iter().enumerate() {
        let result = factorial(&from_integer(n as i64).unwrap()).unwrap();
        assert_eq!(to_integer(&result).unwrap(), *want, "{}!", n);
    }
}

#[test]
fn factorial_fn_is_reusable() {
    let fact = factorial_fn(DEFAULT_RECURSION_LIMIT).unwrap();
    for (n, want) in [(3, 6), (4, 24)] {
        let result = fact.call(from_integer(n).unwrap().into()).unwrap();
        assert_eq!(to_integer(&Numeral::from_value(result).unwrap()).unwrap(), want);
    }
}

#[test]
fn limit_zero_still_handles_the_base_case() {
    let result = factorial_with_limit(&from_integer(0).unwrap(), 0).unwrap();
    assert_eq!(to_integer(&result).unwrap(), 1);
    assert_eq!(
        factorial_with_limit(&from_integer(1).unwrap(), 0).unwrap_err(),
        ChurchError::RecursionLimitExceeded { limit: 0 }
    );
}

#[test]
fn runaway_recursion_is_reported() {
    let spin = recursive_with_limit("spin", 64, |recur, v| recur.call(v)).unwrap();
    let err = spin.call(Value::Integer(1)).unwrap_err();
    assert_eq!(err, ChurchError::RecursionLimitExceeded { limit: 64 });
}

#[test]
fn fix_of_a_non_recursive_generator() {
    let generator = Function::named("constant", |_recur| {
        Ok(Function::named("constant", |_| Ok(Value::from("done"))).into())
    });
    let constant = fix(&generator).unwrap();
    assert_eq!(constant.call(Value::Integer(0)).unwrap(), Value::from("done"));
}

#[test]
fn generator_returning_a_payload_is_rejected() {
    let generator = Function::named("broken", |_recur| Ok(Value::Integer(1)));
    let err = fix(&generator).unwrap_err();
    assert_eq!(
        err,
        ChurchError::TypeError {
            expected: "Function",
            got: "Int"
        }
    );
}

#[test]
fn long_lists_are_bounded_only_by_the_limit() {
    let values: Vec<Value> = (0..5_000).map(Value::Integer).collect();
    let list = from_sequence(values.clone());
    let identity = Function::named("id", Ok);

    let mapped = map(&identity, &list).unwrap();
    assert_eq!(to_sequence(&mapped).unwrap(), values);

    let count = Function::curried2("count", |acc, _| match acc {
        Value::Integer(n) => Ok(Value::Integer(n + 1)),
        other => Ok(other),
    });
    assert_eq!(
        fold(&count, Value::Integer(0), &list).unwrap(),
        Value::Integer(5_000)
    );

    assert!(map_with_limit(&identity, &list, 5_000).is_ok());
    assert_eq!(
        map_with_limit(&identity, &list, 4_999).unwrap_err(),
        ChurchError::RecursionLimitExceeded { limit: 4_999 }
    );
}

#[test]
fn numeral_lists_past_a_few_hundred_elements() {
    let values = vec![3; 600];
    let list = from_integers(&values).unwrap();
    let identity = Function::named("id", Ok);
    assert_eq!(to_integers(&map(&identity, &list).unwrap()).unwrap(), values);
}
