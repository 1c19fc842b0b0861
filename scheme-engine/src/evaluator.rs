//! Tree-walking evaluator.
use std::rc::Rc;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::expr::{Expr, Prim};
use crate::syntax::Syntax;
use crate::value::{values_eq, Closure, Value};

pub fn eval(expr: &Expr, env: &Env) -> Result<Value> {
    match expr {
        Expr::Fixnum(n) => Ok(Value::Integer(*n)),
        Expr::BoolLit(b) => Ok(Value::Boolean(*b)),
        Expr::MakeVoid => Ok(Value::Void),
        Expr::Exit => Ok(Value::Terminate),
        Expr::Var(name) => env
            .find(name)
            .ok_or_else(|| Error::UnboundVariable(name.clone())),
        Expr::If { cond, then, els } => {
            if eval(cond, env)?.is_truthy() {
                eval(then, env)
            } else {
                eval(els, env)
            }
        }
        Expr::Begin(exprs) => {
            let mut result = Value::Null;
            for e in exprs {
                result = eval(e, env)?;
            }
            Ok(result)
        }
        Expr::Lambda { params, body } => Ok(Value::Closure(Rc::new(Closure {
            params: params.clone(),
            body: Rc::clone(body),
            env: env.clone(),
        }))),
        Expr::Apply { func, args } => {
            let func_val = eval(func, env)?;
            let arg_vals = args.iter().map(|a| eval(a, env)).collect::<Result<Vec<_>>>()?;
            apply(&func_val, arg_vals)
        }
        Expr::Let { bindings, body } => {
            // Parallel: every RHS evaluates under the outer `env`, none see
            // each other or themselves.
            let mut body_env = env.clone();
            for (name, rhs) in bindings {
                let value = eval(rhs, env)?;
                body_env = body_env.extend(name.clone(), value);
            }
            eval(body, &body_env)
        }
        Expr::Letrec { bindings, body } => {
            // Three phases in one shared environment: placeholder-extend,
            // evaluate every RHS under that same environment (so mutually
            // recursive lambdas close over each other's cells), then patch
            // the cells in place before evaluating the body.
            let mut letrec_env = env.clone();
            for (name, _) in bindings {
                letrec_env = letrec_env.extend(name.clone(), Value::Null);
            }
            for (name, rhs) in bindings {
                let value = eval(rhs, &letrec_env)?;
                letrec_env.modify(name, value);
            }
            eval(body, &letrec_env)
        }
        Expr::Quote(syntax) => Ok(quote_value(syntax)),
        Expr::Prim(prim) => eval_prim(prim, env),
    }
}

fn apply(func: &Value, args: Vec<Value>) -> Result<Value> {
    match func {
        Value::Closure(closure) => {
            if closure.params.len() != args.len() {
                return Err(Error::Arity {
                    expected: closure.params.len(),
                    found: args.len(),
                });
            }
            let mut call_env = closure.env.clone();
            for (param, arg) in closure.params.iter().zip(args) {
                call_env = call_env.extend(param.clone(), arg);
            }
            eval(&closure.body, &call_env)
        }
        _ => Err(Error::BadCall),
    }
}

fn quote_value(syntax: &Syntax) -> Value {
    match syntax {
        Syntax::Number(n) => Value::Integer(*n),
        Syntax::TrueAtom => Value::Boolean(true),
        Syntax::FalseAtom => Value::Boolean(false),
        Syntax::Identifier(name) => Value::Symbol(name.clone()),
        Syntax::List(items) => quote_list(items),
    }
}

/// A trailing `Identifier(".")` at `len - 2` marks a dotted pair, emitted by
/// the reader for `(a . b)` as `List([a, Identifier("."), b])`.
fn quote_list(items: &[Syntax]) -> Value {
    if items.len() >= 3 {
        if let Syntax::Identifier(marker) = &items[items.len() - 2] {
            if marker.as_str() == "." {
                let mut acc = quote_value(&items[items.len() - 1]);
                for item in items[..items.len() - 2].iter().rev() {
                    acc = Value::cons(quote_value(item), acc);
                }
                return acc;
            }
        }
    }

    let mut acc = Value::Null;
    for item in items.iter().rev() {
        acc = Value::cons(quote_value(item), acc);
    }
    acc
}

fn eval_prim(prim: &Prim, env: &Env) -> Result<Value> {
    use Prim::*;
    match prim {
        Add(a, b) => int_op(a, b, env, |x, y| x + y),
        Sub(a, b) => int_op(a, b, env, |x, y| x - y),
        Mul(a, b) => int_op(a, b, env, |x, y| x * y),
        Lt(a, b) => cmp_op(a, b, env, |x, y| x < y),
        Le(a, b) => cmp_op(a, b, env, |x, y| x <= y),
        NumEq(a, b) => cmp_op(a, b, env, |x, y| x == y),
        Ge(a, b) => cmp_op(a, b, env, |x, y| x >= y),
        Gt(a, b) => cmp_op(a, b, env, |x, y| x > y),
        EqP(a, b) => {
            let va = eval(a, env)?;
            let vb = eval(b, env)?;
            Ok(Value::Boolean(values_eq(&va, &vb)))
        }
        Cons(a, b) => {
            let va = eval(a, env)?;
            let vb = eval(b, env)?;
            Ok(Value::cons(va, vb))
        }
        Car(a) => match eval(a, env)? {
            Value::Pair(pair) => Ok(pair.0.clone()),
            _ => Err(Error::Type("car expects a pair".to_string())),
        },
        Cdr(a) => match eval(a, env)? {
            Value::Pair(pair) => Ok(pair.1.clone()),
            _ => Err(Error::Type("cdr expects a pair".to_string())),
        },
        Not(a) => Ok(Value::Boolean(!eval(a, env)?.is_truthy())),
        BooleanP(a) => Ok(Value::Boolean(matches!(eval(a, env)?, Value::Boolean(_)))),
        FixnumP(a) => Ok(Value::Boolean(matches!(eval(a, env)?, Value::Integer(_)))),
        SymbolP(a) => Ok(Value::Boolean(matches!(eval(a, env)?, Value::Symbol(_)))),
        NullP(a) => Ok(Value::Boolean(matches!(eval(a, env)?, Value::Null))),
        PairP(a) => Ok(Value::Boolean(matches!(eval(a, env)?, Value::Pair(_)))),
        ProcedureP(a) => Ok(Value::Boolean(matches!(eval(a, env)?, Value::Closure(_)))),
        Void => Ok(Value::Void),
        Exit => Ok(Value::Terminate),
    }
}

fn int_op(a: &Expr, b: &Expr, env: &Env, f: impl Fn(i64, i64) -> i64) -> Result<Value> {
    let x = expect_integer(eval(a, env)?)?;
    let y = expect_integer(eval(b, env)?)?;
    Ok(Value::Integer(f(x, y)))
}

fn cmp_op(a: &Expr, b: &Expr, env: &Env, f: impl Fn(i64, i64) -> bool) -> Result<Value> {
    let x = expect_integer(eval(a, env)?)?;
    let y = expect_integer(eval(b, env)?)?;
    Ok(Value::Boolean(f(x, y)))
}

fn expect_integer(value: Value) -> Result<i64> {
    match value {
        Value::Integer(n) => Ok(n),
        _ => Err(Error::Type("expected an integer".to_string())),
    }
}
