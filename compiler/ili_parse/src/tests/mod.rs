//! Parser tests.
//!
//! - `parser`: statements, expressions and syntax errors
//! - `precedence`: property tests for operator precedence and associativity


use ili_ir::{AstPrinter, Program, StringInterner};

use crate::{parse, ParseError};

/// Lex and parse `source`, panicking on lexical errors.
fn parse_source(source: &str, interner: &StringInterner) -> Result<Program, ParseError> {
    let output = ili_lexer::lex(source, interner);
    assert!(
        !output.has_errors(),
        "unexpected lex errors: {:?}",
        output.errors
    );
    parse(&output.tokens, interner)
}

/// Parse `source` and render it with `AstPrinter`.
fn dump(source: &str) -> String {
    let interner = StringInterner::new();
    let program = parse_source(source, &interner).unwrap();
    AstPrinter::new(&program, &interner).print()
}

/// Parse `source`, expecting a syntax error.
fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    match parse_source(source, &interner) {
        Ok(program) => panic!(
            "expected a syntax error, got:\n{}",
            AstPrinter::new(&program, &interner).print()
        ),
        Err(err) => err,
    }
}
