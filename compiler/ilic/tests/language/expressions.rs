//! Arithmetic, precedence, strings and comparisons.

use pretty_assertions::assert_eq;

use crate::common::output_of;

#[test]
fn test_precedence() {
    assert_eq!(output_of("print 2 + 3 * 4;"), "14\n");
    assert_eq!(output_of("print (2 + 3) * 4;"), "20\n");
    assert_eq!(output_of("print 10 - 4 - 3;"), "3\n");
    assert_eq!(output_of("print 100 / 10 / 5;"), "2\n");
    assert_eq!(output_of("print 1 + 2 < 2 * 2;"), "true\n");
}

#[test]
fn test_unary_minus() {
    assert_eq!(output_of("print -3 * 2;"), "-6\n");
    assert_eq!(output_of("print - -5;"), "5\n");
    assert_eq!(output_of("print 2 - -2;"), "4\n");
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(output_of("print 7 / 2; print -7 / 2; print 7 / -2;"), "3\n-3\n-3\n");
}

#[test]
fn test_string_concatenation() {
    assert_eq!(output_of("print \"a\" + 1;"), "a1\n");
    assert_eq!(output_of("print 1 + \"a\";"), "1a\n");
    assert_eq!(output_of("print \"foo\" + \"bar\";"), "foobar\n");
    assert_eq!(output_of("print \"x\" + (1 < 2);"), "xtrue\n");
}

#[test]
fn test_comparisons() {
    let source = "print 1 == 1; print 1 != 1; print 2 > 3; print 3 >= 3; print \"a\" < \"b\";";
    assert_eq!(output_of(source), "true\nfalse\nfalse\ntrue\ntrue\n");
}

#[test]
fn test_mixed_equality_is_false() {
    assert_eq!(output_of("print 1 == \"1\"; print 0 != \"\";"), "false\ntrue\n");
}

#[test]
fn test_comparisons_always_yield_bools() {
    let source = "print 3 > 2 > 1; print 1 < 2 == 1; print 2 > 1 == 1 > 0;";
    assert_eq!(output_of(source), "false\ntrue\ntrue\n");
}

#[test]
fn test_string_has_no_escapes() {
    assert_eq!(output_of("print \"a\\nb\";"), "a\\nb\n");
}
