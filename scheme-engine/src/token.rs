//! Token definitions produced by the lexer and consumed by the reader.

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    /// The `'` shorthand for `(quote ...)`.
    QuoteMark,
    Number,
    /// An identifier or an operator symbol (`+`, `<=`, `boolean?`, ...).
    Atom,
    Eof,
}

#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
}

impl Token {
    /// The source text this token spans.
    pub fn fragment<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.as_range()]
    }
}
