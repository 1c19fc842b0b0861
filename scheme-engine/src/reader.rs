//! Reader: turns source text into syntax trees.
//!
//! This is the boundary collaborator the resolver consumes; it performs no
//! semantic analysis of its own -- no notion of primitives, reserved words,
//! or scope exists at this layer.
use log::trace;

use crate::error::{Error, Result};
use crate::ext::StringExt;
use crate::lexer::Lexer;
use crate::syntax::Syntax;
use crate::token::{Token, TokenKind};

/// Read every top-level form out of `source`.
pub fn read_program(source: &str) -> Result<Vec<Syntax>> {
    let mut lexer = Lexer::new(source);
    let mut token = lexer.next_token();
    let mut forms = Vec::new();

    while token.kind != TokenKind::Eof {
        let (syntax, next) = read_expr(&mut lexer, token)?;
        forms.push(syntax);
        token = next;
    }

    Ok(forms)
}

/// Read a single form from `source`, ignoring any trailing input.
pub fn read_one(source: &str) -> Result<Syntax> {
    let mut lexer = Lexer::new(source);
    let token = lexer.next_token();
    let (syntax, _) = read_expr(&mut lexer, token)?;
    Ok(syntax)
}

fn read_expr(lexer: &mut Lexer, token: Token) -> Result<(Syntax, Token)> {
    match token.kind {
        TokenKind::LeftParen => read_list(lexer),
        TokenKind::RightParen => Err(Error::Parse("unexpected right parenthesis".to_string())),
        TokenKind::Eof => Err(Error::UnexpectedEof),
        TokenKind::QuoteMark => {
            trace!("desugaring quote-mark shorthand");
            let next = lexer.next_token();
            let (datum, next) = read_expr(lexer, next)?;
            let quoted = Syntax::List(vec![Syntax::Identifier("quote".into()), datum]);
            Ok((quoted, next))
        }
        TokenKind::Number | TokenKind::Atom => {
            let fragment = token.fragment(lexer.source());
            let syntax = read_atom(fragment)?;
            Ok((syntax, lexer.next_token()))
        }
    }
}

fn read_list(lexer: &mut Lexer) -> Result<(Syntax, Token)> {
    let mut children = Vec::new();
    let mut token = lexer.next_token();

    loop {
        match token.kind {
            TokenKind::RightParen => return Ok((Syntax::List(children), lexer.next_token())),
            TokenKind::Eof => return Err(Error::UnexpectedEof),
            _ => {
                let (child, next) = read_expr(lexer, token)?;
                children.push(child);
                token = next;
            }
        }
    }
}

fn read_atom(fragment: &str) -> Result<Syntax> {
    match fragment {
        "#t" => return Ok(Syntax::TrueAtom),
        "#f" => return Ok(Syntax::FalseAtom),
        _ => {}
    }

    if is_number_fragment(fragment) {
        let n: i64 = fragment
            .parse()
            .map_err(|_| Error::Parse(format!("invalid number: {fragment}")))?;
        return Ok(Syntax::Number(n));
    }

    Ok(Syntax::Identifier(fragment.into()))
}

fn is_number_fragment(fragment: &str) -> bool {
    match fragment.split_first_char() {
        Some((c, rest)) if c.is_ascii_digit() => rest.chars().all(|c| c.is_ascii_digit()),
        Some(('-', rest)) if !rest.is_empty() => rest.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(read_one("42").unwrap(), Syntax::Number(42));
        assert_eq!(read_one("-7").unwrap(), Syntax::Number(-7));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(read_one("#t").unwrap(), Syntax::TrueAtom);
        assert_eq!(read_one("#f").unwrap(), Syntax::FalseAtom);
    }

    #[test]
    fn test_identifier_vs_negative_number() {
        assert_eq!(read_one("-").unwrap(), Syntax::Identifier("-".into()));
        assert_eq!(read_one("-7").unwrap(), Syntax::Number(-7));
    }

    #[test]
    fn test_list() {
        assert_eq!(
            read_one("(+ 1 2)").unwrap(),
            Syntax::List(vec![
                Syntax::Identifier("+".into()),
                Syntax::Number(1),
                Syntax::Number(2),
            ])
        );
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(
            read_one("((lambda (x) x) 1)").unwrap(),
            Syntax::List(vec![
                Syntax::List(vec![
                    Syntax::Identifier("lambda".into()),
                    Syntax::List(vec![Syntax::Identifier("x".into())]),
                    Syntax::Identifier("x".into()),
                ]),
                Syntax::Number(1),
            ])
        );
    }

    #[test]
    fn test_quote_mark_shorthand() {
        assert_eq!(
            read_one("'a").unwrap(),
            Syntax::List(vec![Syntax::Identifier("quote".into()), Syntax::Identifier("a".into())])
        );
    }

    #[test]
    fn test_dotted_pair_syntax() {
        assert_eq!(
            read_one("(1 . 2)").unwrap(),
            Syntax::List(vec![
                Syntax::Number(1),
                Syntax::Identifier(".".into()),
                Syntax::Number(2),
            ])
        );
    }

    #[test]
    fn test_unexpected_eof() {
        assert!(matches!(read_one("(+ 1"), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_program_multiple_forms() {
        let forms = read_program("(+ 1 2) (* 3 4)").unwrap();
        assert_eq!(forms.len(), 2);
    }
}
