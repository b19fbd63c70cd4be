//! Assignment, conditionals, loops and comments.

use pretty_assertions::assert_eq;

use crate::common::output_of;

#[test]
fn test_if_true_branch() {
    assert_eq!(output_of("if (3 <= 3) { print \"yes\"; }"), "yes\n");
}

#[test]
fn test_if_else_and_truthiness() {
    let source = "\
if (0) { print \"int\"; } else { print \"zero is false\"; }
if (\"\") { print \"str\"; } else { print \"empty is false\"; }
if (\"x\") { print \"non-empty is true\"; }
if (-1) { print \"negative is true\"; }";
    assert_eq!(
        output_of(source),
        "zero is false\nempty is false\nnon-empty is true\nnegative is true\n"
    );
}

#[test]
fn test_while_counts() {
    assert_eq!(
        output_of("i = 0; while (i < 3) { print i; i = i + 1; }"),
        "0\n1\n2\n"
    );
}

#[test]
fn test_nested_loops() {
    let source = "\
i = 0;
total = 0;
while (i < 3) {
    j = 0;
    while (j < 4) {
        total = total + 1;
        j = j + 1;
    }
    i = i + 1;
}
print total;";
    assert_eq!(output_of(source), "12\n");
}

#[test]
fn test_reassignment_changes_type() {
    assert_eq!(output_of("x = 1; x = \"one\"; print x;"), "one\n");
}

#[test]
fn test_comments_and_blank_lines() {
    let source = "\
# leading comment
x = 5; # trailing comment

# another
print x;";
    assert_eq!(output_of(source), "5\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(output_of(""), "");
    assert_eq!(output_of("# only a comment\n"), "");
}
