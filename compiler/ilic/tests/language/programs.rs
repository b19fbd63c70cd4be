//! Complete programs from `language/programs/`.

use pretty_assertions::assert_eq;

use crate::common::output_of;

#[test]
fn test_factorial_program() {
    let source = include_str!("programs/factorial.ili");
    assert_eq!(output_of(source), "1\n2\n6\n24\n120\n720\n");
}

#[test]
fn test_fizzbuzz_program() {
    let source = include_str!("programs/fizzbuzz.ili");
    let expected = "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n";
    assert_eq!(output_of(source), expected);
}

#[test]
fn test_gcd_program() {
    let source = include_str!("programs/gcd.ili");
    assert_eq!(output_of(source), "gcd(48, 18) = 6\ngcd(17, 5) = 1\n");
}
