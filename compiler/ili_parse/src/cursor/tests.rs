use super::*;
use pretty_assertions::assert_eq;

/// Owns the token list and interner so `Cursor` can borrow them.
struct TestCtx {
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = ili_lexer::lex(source, &interner).tokens;
        Self { tokens, interner }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens, &self.interner)
    }
}

#[test]
fn test_cursor_navigation() {
    let ctx = TestCtx::new("x = 42;");
    let mut cursor = ctx.cursor();

    assert!(matches!(cursor.current_kind(), TokenKind::Ident(_)));
    assert!(!cursor.is_at_end());
    assert_eq!(*cursor.peek_next_kind(), TokenKind::Eq);

    cursor.advance();
    assert!(cursor.check(&TokenKind::Eq));

    cursor.advance();
    assert!(cursor.check(&TokenKind::Int(0)), "check ignores payloads");

    cursor.advance();
    assert!(cursor.check(&TokenKind::Semicolon));

    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_advance_stops_at_eof() {
    let ctx = TestCtx::new("x");
    let mut cursor = ctx.cursor();
    cursor.advance();
    let eof = cursor.current_span();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current_span(), eof);
    assert_eq!(cursor.previous_span(), Span::new(0, 1, 1));
    assert!(cursor.is_at_end());
}

#[test]
fn test_empty_token_list_reads_as_eof() {
    let tokens = TokenList::new();
    let interner = StringInterner::new();
    let cursor = Cursor::new(&tokens, &interner);
    assert!(cursor.is_at_end());
    assert_eq!(*cursor.peek_next_kind(), TokenKind::Eof);
    assert_eq!(cursor.previous_span(), Span::DUMMY);
}

#[test]
fn test_eat() {
    let ctx = TestCtx::new("; x");
    let mut cursor = ctx.cursor();
    assert!(!cursor.eat(&TokenKind::Comma));
    assert!(cursor.eat(&TokenKind::Semicolon));
    assert!(matches!(cursor.current_kind(), TokenKind::Ident(_)));
}

#[test]
fn test_expect_success() {
    let ctx = TestCtx::new("print x");
    let mut cursor = ctx.cursor();

    let token = cursor.expect(&TokenKind::Print).unwrap();
    assert_eq!(token.kind, TokenKind::Print);
    assert_eq!(cursor.expect_ident().unwrap(), ctx.interner.intern("x"));
}

#[test]
fn test_expect_failure_names_both_tokens() {
    let ctx = TestCtx::new("print x");
    let mut cursor = ctx.cursor();

    let err = cursor.expect(&TokenKind::If).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`if`".to_string(),
            found: "`print`".to_string(),
        }
    );
    assert!(
        cursor.check(&TokenKind::Print),
        "failed expect consumes nothing"
    );
}

#[test]
fn test_expect_ident_failure() {
    let ctx = TestCtx::new("42");
    let mut cursor = ctx.cursor();

    let err = cursor.expect_ident().unwrap_err();
    assert_eq!(err.to_string(), "expected identifier, found integer `42` at line 1");
}

#[test]
fn test_expect_at_end_is_eof_error() {
    let ctx = TestCtx::new("x\n");
    let mut cursor = ctx.cursor();
    cursor.advance();

    let err = cursor.expect(&TokenKind::Semicolon).unwrap_err();
    assert!(err.is_eof());
    assert_eq!(err.line(), 2);
    assert_eq!(err.to_string(), "unexpected end of input, expected `;` at line 2");
}
