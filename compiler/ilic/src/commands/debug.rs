//! Debug commands: `lex` and `parse` for inspecting interpreter internals.

use std::fmt::Write;

use ili_ir::{AstPrinter, Program, StringInterner};
use ili_lexer::LexOutput;

use super::read_source;

/// Render a token stream, one token per line with its payload and line.
pub fn render_tokens(lexed: &LexOutput, interner: &StringInterner) -> String {
    let mut out = String::new();
    for tok in &lexed.tokens {
        let _ = writeln!(out, "  {} @ {}", tok.kind.describe(interner), tok.span);
    }
    for err in &lexed.errors {
        let _ = writeln!(out, "  error: {err}");
    }
    out
}

/// Render a parsed program as an indented tree.
pub fn render_ast(program: &Program, interner: &StringInterner) -> String {
    AstPrinter::new(program, interner).print()
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_source(path);
    let interner = StringInterner::new();
    let lexed = ili_lexer::lex(&content, &interner);

    println!("Tokens for '{}' ({} tokens):", path, lexed.tokens.len());
    print!("{}", render_tokens(&lexed, &interner));
}

/// Parse a file and display its AST.
pub fn parse_file(path: &str) {
    let content = read_source(path);
    let interner = StringInterner::new();
    let lexed = ili_lexer::lex(&content, &interner);

    for err in &lexed.errors {
        eprintln!("{err}");
    }

    match ili_parse::parse(&lexed.tokens, &interner) {
        Ok(program) => {
            println!("Parse result for '{path}':");
            println!("  Statements: {}", program.arena.stmt_count());
            println!("  Expressions: {}", program.arena.expr_count());
            println!();
            print!("{}", render_ast(&program, &interner));
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_tokens_shows_payload_and_line() {
        let interner = StringInterner::new();
        let lexed = ili_lexer::lex("x = 1;\nprint \"hi\" @", &interner);
        let expected = "\
  identifier `x` @ line 1
  `=` @ line 1
  integer `1` @ line 1
  `;` @ line 1
  `print` @ line 2
  string \"hi\" @ line 2
  end of input @ line 2
  error: illegal character '@' at line 2
";
        assert_eq!(render_tokens(&lexed, &interner), expected);
    }

    #[test]
    fn test_render_ast() {
        let interner = StringInterner::new();
        let lexed = ili_lexer::lex("print 1 + 2;", &interner);
        let program = ili_parse::parse(&lexed.tokens, &interner).unwrap();
        assert_eq!(
            render_ast(&program, &interner),
            "Program\n  Print\n    Binary +\n      Int 1\n      Int 2\n"
        );
    }
}
