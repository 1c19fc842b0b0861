//! Runtime value domain produced by evaluation.
use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::env::Env;
use crate::expr::Expr;

/// A callable value pairing a lambda's parameter list and body with the
/// environment captured at the point the `Lambda` was reduced, not the
/// environment it's later applied in.
pub struct Closure {
    pub params: Vec<SmolStr>,
    pub body: Rc<Expr>,
    pub env: Env,
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure").field("params", &self.params).finish()
    }
}

/// A dynamically typed runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Symbol(SmolStr),
    Null,
    Void,
    Pair(Rc<(Value, Value)>),
    Closure(Rc<Closure>),
    /// Sentinel produced by `(exit)`; the host REPL stops on seeing it.
    Terminate,
    /// Resolver-internal hint for a resolution-time binding. The resolver in
    /// this crate never actually constructs one (see `resolver.rs`), but the
    /// variant is kept so matching on `Value` stays exhaustive against the
    /// full domain; it must never be observed by evaluated programs.
    ExpressionCell(Rc<Expr>),
}

impl Value {
    pub fn cons(car: Value, cdr: Value) -> Value {
        Value::Pair(Rc::new((car, cdr)))
    }

    /// Only `Boolean(false)` is false; everything else, including `0`,
    /// `Null`, and `Void`, is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false))
    }
}

/// Structural identity test backing the `eq?` primitive.
pub fn values_eq(a: &Value, b: &Value) -> bool {
    use Value::*;
    match (a, b) {
        (Boolean(x), Boolean(y)) => x == y,
        (Symbol(x), Symbol(y)) => x == y,
        (Integer(x), Integer(y)) => x == y,
        (Null, Null) => true,
        (Void, Void) => true,
        (Pair(x), Pair(y)) => Rc::ptr_eq(x, y),
        (Closure(x), Closure(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::Null.is_truthy());
        assert!(Value::Void.is_truthy());
    }

    #[test]
    fn test_values_eq_by_value() {
        assert!(values_eq(&Value::Integer(3), &Value::Integer(3)));
        assert!(!values_eq(&Value::Integer(3), &Value::Integer(4)));
        assert!(values_eq(&Value::Symbol("a".into()), &Value::Symbol("a".into())));
        assert!(values_eq(&Value::Null, &Value::Null));
        assert!(!values_eq(&Value::Null, &Value::Void));
    }

    #[test]
    fn test_values_eq_pair_identity() {
        let pair = Value::cons(Value::Integer(1), Value::Integer(2));
        let alias = pair.clone();
        let other = Value::cons(Value::Integer(1), Value::Integer(2));
        assert!(values_eq(&pair, &alias));
        assert!(!values_eq(&pair, &other));
    }
}
