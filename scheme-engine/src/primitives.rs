//! Process-wide, read-only tables of primitive and reserved names.
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A built-in operator. Arity is fixed per kind, not per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimKind {
    Add,
    Sub,
    Mul,
    Lt,
    Le,
    NumEq,
    Ge,
    Gt,
    EqP,
    Cons,
    Car,
    Cdr,
    Not,
    BooleanP,
    FixnumP,
    SymbolP,
    NullP,
    PairP,
    ProcedureP,
    Void,
    Exit,
}

impl PrimKind {
    pub const fn arity(self) -> usize {
        use PrimKind::*;
        match self {
            Add | Sub | Mul | Lt | Le | NumEq | Ge | Gt | EqP | Cons => 2,
            Car | Cdr | Not | BooleanP | FixnumP | SymbolP | NullP | PairP | ProcedureP => 1,
            Void | Exit => 0,
        }
    }
}

/// A special form recognized by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedKind {
    Lambda,
    Let,
    Letrec,
    If,
    Begin,
    Quote,
}

pub static PRIMITIVES: Lazy<HashMap<&'static str, PrimKind>> = Lazy::new(|| {
    use PrimKind::*;
    HashMap::from([
        ("+", Add),
        ("-", Sub),
        ("*", Mul),
        ("<", Lt),
        ("<=", Le),
        ("=", NumEq),
        (">=", Ge),
        (">", Gt),
        ("eq?", EqP),
        ("cons", Cons),
        ("car", Car),
        ("cdr", Cdr),
        ("not", Not),
        ("boolean?", BooleanP),
        ("fixnum?", FixnumP),
        ("symbol?", SymbolP),
        ("null?", NullP),
        ("pair?", PairP),
        ("procedure?", ProcedureP),
        ("void", Void),
        ("exit", Exit),
    ])
});

pub static RESERVED: Lazy<HashMap<&'static str, ReservedKind>> = Lazy::new(|| {
    use ReservedKind::*;
    HashMap::from([
        ("lambda", Lambda),
        ("let", Let),
        ("letrec", Letrec),
        ("if", If),
        ("begin", Begin),
        ("quote", Quote),
    ])
});

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_arities() {
        assert_eq!(PrimKind::Add.arity(), 2);
        assert_eq!(PrimKind::Car.arity(), 1);
        assert_eq!(PrimKind::Void.arity(), 0);
    }

    #[test]
    fn test_tables_populated() {
        assert_eq!(PRIMITIVES.get("+"), Some(&PrimKind::Add));
        assert_eq!(PRIMITIVES.get("boolean?"), Some(&PrimKind::BooleanP));
        assert_eq!(RESERVED.get("letrec"), Some(&ReservedKind::Letrec));
        assert_eq!(PRIMITIVES.get("not-a-primitive"), None);
    }
}
