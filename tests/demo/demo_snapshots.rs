use church::DEFAULT_RECURSION_LIMIT;
use church::demo::{DemoReport, run_demo};

fn report() -> DemoReport {
    run_demo(DEFAULT_RECURSION_LIMIT).unwrap()
}

#[test]
fn demo_text() {
    insta::assert_snapshot!(report().to_string(), @r"
    1 + 2 = 3
    2 * 3 = 6
    7 - 3 = 4
    2 - 5 = 0
    first(pair(1, 2)) = 1
    second(pair(1, 2)) = 2
    list = [1, 2, 3, 4]
    map(double) = [2, 4, 6, 8]
    filter(even) = [2, 4]
    fold(add, 0) = 10
    5! = 120
    ");
}

#[test]
fn demo_json() {
    let json = serde_json::to_string_pretty(&report()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "sum": 3,
      "product": 6,
      "difference": 4,
      "saturated_difference": 0,
      "pair": [
        1,
        2
      ],
      "list": [
        1,
        2,
        3,
        4
      ],
      "doubled": [
        2,
        4,
        6,
        8
      ],
      "evens": [
        2,
        4
      ],
      "total": 10,
      "factorial": 120
    }
    "#);
}

#[test]
fn demo_fails_under_a_tight_limit() {
    let err = run_demo(2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "recursion limit exceeded: more than 2 nested unfoldings"
    );
}
