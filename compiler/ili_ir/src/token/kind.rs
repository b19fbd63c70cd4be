//! Token kind enumeration.

use crate::{Name, StringInterner};

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    /// Integer literal: `42`.
    Int(i64),
    /// String literal: `"hello"` (contents only, no quotes).
    String(Name),

    // Identifiers
    Ident(Name),

    // Keywords
    If,
    Else,
    While,
    Func,
    Print,
    Return,

    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,

    /// End of input. Always the last token of a `TokenList`.
    Eof,
}

impl TokenKind {
    /// Look up a keyword by its source text.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "while" => Some(TokenKind::While),
            "func" => Some(TokenKind::Func),
            "print" => Some(TokenKind::Print),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// Check if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Func
                | TokenKind::Print
                | TokenKind::Return
        )
    }

    /// Get a display name for the token kind (for error messages).
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::String(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Func => "func",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Eof => "end of input",
        }
    }

    /// Describe the token including its payload, e.g. ``identifier `count` ``.
    ///
    /// Fixed lexemes are rendered quoted in backticks.
    pub fn describe(&self, interner: &StringInterner) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::String(name) => format!("string \"{}\"", interner.lookup(*name)),
            TokenKind::Ident(name) => format!("identifier `{}`", interner.lookup(*name)),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("`{}`", other.display_name()),
        }
    }
}
