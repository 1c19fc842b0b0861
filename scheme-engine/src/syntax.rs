//! Raw syntax tree produced by the reader; input to the resolver.
use smol_str::SmolStr;

/// An unresolved syntactic form: a number, an atom, or a parenthesized list
/// of further forms. Carries no notion of primitives, reserved words, or
/// scope -- that is entirely the resolver's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Syntax {
    Number(i64),
    Identifier(SmolStr),
    TrueAtom,
    FalseAtom,
    List(Vec<Syntax>),
}
