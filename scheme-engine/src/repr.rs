//! External text representation of runtime values.
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(true) => write!(f, "#t"),
            Value::Boolean(false) => write!(f, "#f"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::Null => write!(f, "()"),
            Value::Void => write!(f, "#<void>"),
            Value::Terminate => write!(f, "#<terminate>"),
            Value::Pair(pair) => {
                write!(f, "(")?;
                fmt_pair(f, pair)?;
                write!(f, ")")
            }
            Value::Closure(closure) => write!(f, "<procedure {:?}>", Rc::as_ptr(closure)),
            Value::ExpressionCell(_) => write!(f, "<expression>"),
        }
    }
}

fn fmt_pair(f: &mut fmt::Formatter<'_>, pair: &(Value, Value)) -> fmt::Result {
    write!(f, "{}", pair.0)?;
    match &pair.1 {
        Value::Null => Ok(()),
        Value::Pair(inner) => {
            write!(f, " ")?;
            fmt_pair(f, inner)
        }
        tail => write!(f, " . {tail}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_atoms() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Boolean(true).to_string(), "#t");
        assert_eq!(Value::Boolean(false).to_string(), "#f");
        assert_eq!(Value::Null.to_string(), "()");
    }

    #[test]
    fn test_proper_list() {
        let list = Value::cons(Value::Integer(1), Value::cons(Value::Integer(2), Value::Null));
        assert_eq!(list.to_string(), "(1 2)");
    }

    #[test]
    fn test_dotted_pair() {
        let pair = Value::cons(Value::Integer(1), Value::Integer(2));
        assert_eq!(pair.to_string(), "(1 . 2)");
    }
}
