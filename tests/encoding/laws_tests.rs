use church::convert::{from_bool, from_integer, to_bool, to_integer};
use church::encoding::arithmetic::{
    add, divide, equal, is_zero, less_or_equal, multiply, power, predecessor, remainder, subtract,
};
use church::encoding::boolean::{and, not, or};
use church::encoding::combinators::{bluebird, cardinal, identity, kestrel, kite, starling};
use church::encoding::Numeral;
use church::Value;
use rstest::rstest;

fn num(k: i64) -> Numeral {
    from_integer(k).unwrap()
}

fn int(n: &Numeral) -> i64 {
    to_integer(n).unwrap()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(17)]
fn numerals_round_trip(#[case] k: i64) {
    assert_eq!(int(&num(k)), k);
}

#[rstest]
#[case(0, 0)]
#[case(1, 2)]
#[case(3, 4)]
#[case(6, 0)]
fn add_and_multiply_match_native(#[case] m: i64, #[case] n: i64) {
    assert_eq!(int(&add(&num(m), &num(n))), m + n);
    assert_eq!(int(&multiply(&num(m), &num(n))), m * n);
}

#[rstest]
#[case(2, 0, 1)]
#[case(2, 3, 8)]
#[case(3, 2, 9)]
#[case(0, 2, 0)]
fn power_matches_native(#[case] m: i64, #[case] n: i64, #[case] expected: i64) {
    assert_eq!(int(&power(&num(m), &num(n)).unwrap()), expected);
}

#[rstest]
#[case(7, 3, 4)]
#[case(3, 7, 0)]
#[case(5, 5, 0)]
#[case(0, 1, 0)]
fn subtraction_saturates(#[case] m: i64, #[case] n: i64, #[case] expected: i64) {
    assert_eq!(int(&subtract(&num(m), &num(n)).unwrap()), expected);
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(10, 9)]
fn predecessor_of(#[case] n: i64, #[case] expected: i64) {
    assert_eq!(int(&predecessor(&num(n)).unwrap()), expected);
}

#[rstest]
#[case(9, 4, 2, 1)]
#[case(8, 2, 4, 0)]
#[case(3, 5, 0, 3)]
#[case(4, 0, 0, 0)]
fn quotient_and_remainder(
    #[case] m: i64,
    #[case] n: i64,
    #[case] quotient: i64,
    #[case] rest: i64,
) {
    assert_eq!(int(&divide(&num(m), &num(n)).unwrap()), quotient);
    assert_eq!(int(&remainder(&num(m), &num(n)).unwrap()), rest);
}

#[rstest]
#[case(2, 3)]
#[case(3, 3)]
#[case(4, 1)]
#[case(0, 0)]
fn comparisons(#[case] m: i64, #[case] n: i64) {
    assert_eq!(to_bool(&less_or_equal(&num(m), &num(n)).unwrap()).unwrap(), m <= n);
    assert_eq!(to_bool(&equal(&num(m), &num(n)).unwrap()).unwrap(), m == n);
}

#[test]
fn is_zero_only_for_zero() {
    assert!(to_bool(&is_zero(&num(0)).unwrap()).unwrap());
    assert!(!to_bool(&is_zero(&num(1)).unwrap()).unwrap());
}

#[rstest]
#[case(false, false)]
#[case(false, true)]
#[case(true, false)]
#[case(true, true)]
fn de_morgan(#[case] p: bool, #[case] q: bool) {
    let (p, q) = (from_bool(p), from_bool(q));
    let lhs = not(&and(&p, &q).unwrap()).unwrap();
    let rhs = or(&not(&p).unwrap(), &not(&q).unwrap()).unwrap();
    assert_eq!(to_bool(&lhs).unwrap(), to_bool(&rhs).unwrap());
}

#[test]
fn double_negation() {
    for b in [false, true] {
        let twice = not(&not(&from_bool(b)).unwrap()).unwrap();
        assert_eq!(to_bool(&twice).unwrap(), b);
    }
}

#[test]
fn combinator_laws() {
    let (x, y) = (Value::Integer(1), Value::Integer(2));

    assert_eq!(identity().call(x.clone()).unwrap(), x);
    assert_eq!(kestrel().call2(x.clone(), y.clone()).unwrap(), x);
    assert_eq!(kite().call2(x.clone(), y.clone()).unwrap(), y);

    // S K K behaves as I
    let skk = starling().call2(kestrel().into(), kestrel().into()).unwrap();
    assert_eq!(skk.apply(x.clone()).unwrap(), x);

    // C K behaves as KI
    let ck = cardinal().call(kestrel().into()).unwrap();
    assert_eq!(ck.apply2(x.clone(), y.clone()).unwrap(), y);

    // B I I behaves as I
    let bii = bluebird().call2(identity().into(), identity().into()).unwrap();
    assert_eq!(bii.apply(y.clone()).unwrap(), y);
}
