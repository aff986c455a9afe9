use std::process::{Command, Output};

fn run_church(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_church"))
        .args(args)
        .env_remove("CHURCH_RECURSION_LIMIT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run church with args {:?}: {e}", args))
}

fn combined_output(output: &Output) -> String {
    let mut text = String::new();
    text.push_str(&String::from_utf8_lossy(&output.stdout));
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn arith_add() {
    let output = run_church(&["arith", "add", "2", "3"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout(&output), "5");
}

#[test]
fn arith_sub_saturates() {
    let output = run_church(&["arith", "sub", "2", "5"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout(&output), "0");
}

#[test]
fn arith_comparison_prints_a_boolean() {
    let output = run_church(&["arith", "lt", "2", "5"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout(&output), "true");
}

#[test]
fn factorial_of_five() {
    let output = run_church(&["factorial", "5"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout(&output), "120");
}

#[test]
fn list_evens() {
    let output = run_church(&["list", "evens", "1", "2", "3", "4"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout(&output), "[2, 4]");
}

#[test]
fn list_sum() {
    let output = run_church(&["list", "sum", "1", "2", "3", "4"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout(&output), "10");
}

#[test]
fn negative_input_is_a_domain_error() {
    let output = run_church(&["factorial", "-1"]);
    let text = combined_output(&output);
    assert!(!output.status.success(), "expected failure, output:\n{}", text);
    assert!(text.contains("domain error"), "output:\n{}", text);
}

#[test]
fn recursion_limit_flag_is_honoured() {
    let output = run_church(&["--recursion-limit", "3", "factorial", "5"]);
    let text = combined_output(&output);
    assert!(!output.status.success(), "expected failure, output:\n{}", text);
    assert!(text.contains("recursion limit exceeded"), "output:\n{}", text);
}

#[test]
fn recursion_limit_env_var_is_honoured() {
    let output = Command::new(env!("CARGO_BIN_EXE_church"))
        .args(["factorial", "5"])
        .env("CHURCH_RECURSION_LIMIT", "3")
        .output()
        .unwrap_or_else(|e| panic!("failed to run church: {e}"));
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("recursion limit exceeded"));
}

#[test]
fn demo_json_parses() {
    let output = run_church(&["demo", "--json"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["factorial"], 120);
    assert_eq!(report["evens"], serde_json::json!([2, 4]));
}

#[test]
fn demo_text_ends_with_factorial() {
    let output = run_church(&["demo"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(stdout(&output).ends_with("5! = 120"));
}

fn ones(count: usize) -> Vec<&'static str> {
    vec!["1"; count]
}

#[test]
fn list_double_over_six_hundred_values() {
    let mut args = vec!["list", "double"];
    args.extend(ones(600));
    let output = run_church(&args);
    assert!(output.status.success(), "{}", combined_output(&output));
    let expected = format!("[{}]", vec!["2"; 600].join(", "));
    assert_eq!(stdout(&output), expected);
}

#[test]
fn list_sum_and_length_over_six_hundred_values() {
    for (op, expected) in [("sum", "600"), ("length", "600")] {
        let mut args = vec!["list", op];
        args.extend(ones(600));
        let output = run_church(&args);
        assert!(output.status.success(), "{}", combined_output(&output));
        assert_eq!(stdout(&output), expected, "list {}", op);
    }
}

#[test]
fn list_commands_honour_the_recursion_limit() {
    let mut args = vec!["--recursion-limit", "599", "list", "double"];
    args.extend(ones(600));
    let output = run_church(&args);
    let text = combined_output(&output);
    assert!(!output.status.success(), "expected failure, output:\n{}", text);
    assert!(text.contains("more than 599 nested unfoldings"), "output:\n{}", text);

    let mut args = vec!["--recursion-limit", "600", "list", "evens"];
    args.extend(ones(600));
    let output = run_church(&args);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout(&output), "[]");
}

#[test]
fn arith_div_honours_the_recursion_limit() {
    let output = run_church(&["arith", "div", "700", "1"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout(&output), "700");

    let output = run_church(&["--recursion-limit", "10", "arith", "div", "700", "1"]);
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("recursion limit exceeded"));
}
