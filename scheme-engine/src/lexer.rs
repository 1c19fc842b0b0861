//! Lexical analysis: turns source text into a stream of tokens for the reader.
use log::trace;

use crate::cursor::{Cursor, EOF_CHAR};
use crate::span::{BytePos, Span};
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    start: BytePos,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Cursor::new(source);
        cursor.bump();
        Lexer {
            start: BytePos(cursor.pos()),
            cursor,
            source,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    fn start_token(&mut self) {
        self.start = BytePos(self.cursor.try_pos().unwrap_or(self.source.len()));
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let lo = self.start;
        let hi = BytePos(self.cursor.peek_offset());
        let size = hi.0.saturating_sub(lo.0);
        let token = Token {
            span: Span::new(lo, size),
            kind,
        };
        self.cursor.bump();
        token
    }

    /// Scan and return the next token, advancing past any leading whitespace.
    pub fn next_token(&mut self) -> Token {
        while !self.cursor.at_end() && rules::is_whitespace(self.cursor.char()) {
            self.cursor.bump();
        }

        self.start_token();

        if self.cursor.at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let c = self.cursor.char();
        trace!("lexer at {:?} ({:?})", self.cursor.pos(), c);

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '\'' => self.make_token(TokenKind::QuoteMark),
            c if rules::is_digit(c) => self.consume_number(),
            _ => self.consume_atom(),
        }
    }

    fn consume_number(&mut self) -> Token {
        while rules::is_digit(self.cursor.peek_char().unwrap_or(EOF_CHAR)) {
            self.cursor.bump();
        }
        self.make_token(TokenKind::Number)
    }

    fn consume_atom(&mut self) -> Token {
        while rules::is_atom_continue(self.cursor.peek_char().unwrap_or(EOF_CHAR)) {
            self.cursor.bump();
        }
        self.make_token(TokenKind::Atom)
    }
}

mod rules {
    /// Characters that may appear inside (and, except for a leading digit,
    /// start) an atom: scheme identifiers double as operator symbols, so this
    /// is deliberately permissive beyond ASCII letters.
    pub fn is_atom_continue(c: char) -> bool {
        !matches!(c, '(' | ')' | '\'' | '\0') && !c.is_whitespace()
    }

    pub fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    pub fn is_whitespace(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\r')
    }
}
