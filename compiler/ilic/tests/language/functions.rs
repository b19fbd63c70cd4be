//! Function definitions, calls, scoping and recursion.

use pretty_assertions::assert_eq;

use ili_diagnostic::ErrorCode;
use ilic::SessionConfig;

use crate::common::{config, output_of, run, run_with};

#[test]
fn test_parameters_shadow_globals() {
    assert_eq!(
        output_of("x = 1; func f(x) { x = 2; } f(10); print x;"),
        "1\n"
    );
}

#[test]
fn test_recursive_fibonacci() {
    let source = "\
func fib(n) {
    if (n < 2) { return n; }
    return fib(n - 1) + fib(n - 2);
}
print fib(15);";
    assert_eq!(output_of(source), "610\n");
}

#[test]
fn test_mutual_recursion() {
    let source = "\
func is_even(n) { if (n == 0) { return 1; } return is_odd(n - 1); }
func is_odd(n) { if (n == 0) { return 0; } return is_even(n - 1); }
print is_even(10);
print is_odd(7);";
    assert_eq!(output_of(source), "1\n1\n");
}

#[test]
fn test_call_without_return_yields_trailing_value() {
    assert_eq!(output_of("func twice(n) { n * 2; } print twice(21);"), "42\n");
}

#[test]
fn test_function_sees_only_parameters() {
    let result = run("g = 3; func f() { return g; } print f();");
    assert_eq!(result.output, "0\n");
    assert_eq!(result.outcome.warnings, 1);
    assert_eq!(result.outcome.errors, 0);
    assert_eq!(result.runtime_codes(), vec![ErrorCode::E6001]);
}

#[test]
fn test_call_depth_limit_is_fatal() {
    let config = SessionConfig {
        max_call_depth: Some(100),
        ..config()
    };
    let result = run_with(config, "func f(n) { return f(n + 1); } print 1; f(0); print 2;");
    assert_eq!(result.output, "1\n");
    assert_eq!(result.outcome.errors, 1);
    assert_eq!(result.outcome.value, None);
    assert!(result.rendered.contains("error[E6008]"), "{}", result.rendered);
}

#[test]
fn test_runaway_recursion_stops_at_default_limit() {
    let result = run("func f(n) { return f(n + 1); } f(0); print \"unreachable\";");
    assert_eq!(result.output, "");
    assert_eq!(result.outcome.errors, 1);
    assert!(
        result.rendered.contains("error[E6008]"),
        "{}",
        result.rendered
    );
    assert!(result.rendered.contains("1000"), "{}", result.rendered);
}

#[test]
fn test_recursion_below_default_limit() {
    let source = "func sum(n) { if (n == 0) { return 0; } return n + sum(n - 1); } print sum(900);";
    assert_eq!(output_of(source), "405450\n");
}

#[test]
fn test_raised_limit_allows_deep_recursion() {
    let config = SessionConfig {
        max_call_depth: Some(20_000),
        ..config()
    };
    let source = "func sum(n) { if (n == 0) { return 0; } return n + sum(n - 1); } print sum(10000);";
    let result = run_with(config, source);
    assert_eq!(result.output, "50005000\n");
    assert_eq!(result.outcome.errors, 0);
}
