//! Crate error type.
use smol_str::SmolStr;
use thiserror::Error;

use crate::token::TokenKind;

pub type Result<T> = std::result::Result<T, self::Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Parse(String),

    #[error("token error: expected {expected:?}, found {actual:?}")]
    Token { expected: TokenKind, actual: TokenKind },

    #[error("unexpected EOF")]
    UnexpectedEof,

    #[error("Unbound variable: {0}")]
    UnboundVariable(SmolStr),

    #[error("Expect {expected} argument(s), found {found}")]
    Arity { expected: usize, found: usize },

    #[error("Type error")]
    Type(String),

    #[error("Bad function call")]
    BadCall,
}
