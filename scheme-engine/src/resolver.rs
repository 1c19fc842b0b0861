//! Resolver: turns a syntax tree into a typed expression AST.
//!
//! Responsible for desugaring bare primitive identifiers into lambdas,
//! enforcing primitive arities, recognizing reserved special forms, and
//! disambiguating variable references from applications.
use log::trace;
use smol_str::SmolStr;

use crate::error::{Error, Result};
use crate::expr::{Expr, Prim};
use crate::primitives::{PrimKind, ReservedKind, PRIMITIVES, RESERVED};
use crate::syntax::Syntax;
use crate::value::Value;

/// The resolution-time environment.
///
/// Reuses the persistent chain from `env.rs`. Its job here is purely a name
/// *set* -- deciding whether an identifier is a user binding, a primitive, or
/// unbound -- so the value stored at each cell is never inspected; every
/// binding below stores `Value::Void`.
pub use crate::env::Env as ResolveEnv;

pub fn resolve(syntax: &Syntax, env: &ResolveEnv) -> Result<Expr> {
    match syntax {
        Syntax::Number(n) => Ok(Expr::Fixnum(*n)),
        Syntax::TrueAtom => Ok(Expr::BoolLit(true)),
        Syntax::FalseAtom => Ok(Expr::BoolLit(false)),
        Syntax::Identifier(name) => resolve_identifier(name, env),
        Syntax::List(xs) => resolve_list(xs, env),
    }
}

fn resolve_identifier(name: &str, env: &ResolveEnv) -> Result<Expr> {
    if env.find(name).is_some() {
        return Ok(Expr::Var(name.into()));
    }

    if let Some(prim) = PRIMITIVES.get(name) {
        trace!("desugaring bare primitive `{name}` into a lambda");
        return resolve(&desugar_primitive(name, *prim), env);
    }

    // Deferred: may still be unbound at eval time, but resolution doesn't
    // reject it -- only `Env::find` at eval time decides that.
    Ok(Expr::Var(name.into()))
}

/// Build `(lambda (x [y]) (name x [y]))` so a bare primitive becomes a
/// first-class, curryable, renameable closure.
fn desugar_primitive(name: &str, prim: PrimKind) -> Syntax {
    let params: Vec<SmolStr> = match prim.arity() {
        0 => vec![],
        1 => vec!["x".into()],
        2 => vec!["x".into(), "y".into()],
        n => unreachable!("no primitive has arity {n}"),
    };

    let mut call = vec![Syntax::Identifier(name.into())];
    call.extend(params.iter().cloned().map(Syntax::Identifier));

    Syntax::List(vec![
        Syntax::Identifier("lambda".into()),
        Syntax::List(params.into_iter().map(Syntax::Identifier).collect()),
        Syntax::List(call),
    ])
}

fn resolve_list(xs: &[Syntax], env: &ResolveEnv) -> Result<Expr> {
    if xs.is_empty() {
        return Ok(Expr::MakeVoid);
    }

    match &xs[0] {
        Syntax::Identifier(op) => {
            if env.find(op).is_some() {
                return resolve_apply(&xs[0], &xs[1..], env);
            }
            if let Some(prim) = PRIMITIVES.get(op.as_str()) {
                return resolve_prim(*prim, op, &xs[1..], env);
            }
            if let Some(reserved) = RESERVED.get(op.as_str()) {
                return resolve_special_form(*reserved, &xs[1..], env);
            }
            resolve_apply(&xs[0], &xs[1..], env)
        }
        Syntax::List(_) => resolve_apply(&xs[0], &xs[1..], env),
        _ => Err(Error::Parse("Unknown operation".to_string())),
    }
}

fn resolve_apply(func: &Syntax, args: &[Syntax], env: &ResolveEnv) -> Result<Expr> {
    let func = Box::new(resolve(func, env)?);
    let args = args.iter().map(|a| resolve(a, env)).collect::<Result<Vec<_>>>()?;
    Ok(Expr::Apply { func, args })
}

fn expect_arity(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::Arity { expected, found })
    }
}

fn resolve_box(syntax: &Syntax, env: &ResolveEnv) -> Result<Box<Expr>> {
    resolve(syntax, env).map(Box::new)
}

fn resolve_prim(prim: PrimKind, name: &str, args: &[Syntax], env: &ResolveEnv) -> Result<Expr> {
    expect_arity(prim.arity(), args.len())?;
    let _ = name;

    use PrimKind::*;
    let prim_expr = match prim {
        Add => Prim::Add(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        Sub => Prim::Sub(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        Mul => Prim::Mul(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        Lt => Prim::Lt(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        Le => Prim::Le(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        NumEq => Prim::NumEq(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        Ge => Prim::Ge(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        Gt => Prim::Gt(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        EqP => Prim::EqP(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        Cons => Prim::Cons(resolve_box(&args[0], env)?, resolve_box(&args[1], env)?),
        Car => Prim::Car(resolve_box(&args[0], env)?),
        Cdr => Prim::Cdr(resolve_box(&args[0], env)?),
        Not => Prim::Not(resolve_box(&args[0], env)?),
        BooleanP => Prim::BooleanP(resolve_box(&args[0], env)?),
        FixnumP => Prim::FixnumP(resolve_box(&args[0], env)?),
        SymbolP => Prim::SymbolP(resolve_box(&args[0], env)?),
        NullP => Prim::NullP(resolve_box(&args[0], env)?),
        PairP => Prim::PairP(resolve_box(&args[0], env)?),
        ProcedureP => Prim::ProcedureP(resolve_box(&args[0], env)?),
        Void => Prim::Void,
        Exit => Prim::Exit,
    };
    Ok(Expr::Prim(prim_expr))
}

fn resolve_special_form(form: ReservedKind, args: &[Syntax], env: &ResolveEnv) -> Result<Expr> {
    match form {
        ReservedKind::If => {
            expect_arity(3, args.len())?;
            Ok(Expr::If {
                cond: resolve_box(&args[0], env)?,
                then: resolve_box(&args[1], env)?,
                els: resolve_box(&args[2], env)?,
            })
        }
        ReservedKind::Begin => {
            let seq = args.iter().map(|a| resolve(a, env)).collect::<Result<Vec<_>>>()?;
            Ok(Expr::Begin(seq))
        }
        ReservedKind::Quote => {
            expect_arity(1, args.len())?;
            Ok(Expr::Quote(args[0].clone()))
        }
        ReservedKind::Lambda => resolve_lambda(args, env),
        ReservedKind::Let => resolve_let(args, env, false),
        ReservedKind::Letrec => resolve_let(args, env, true),
    }
}

fn resolve_lambda(args: &[Syntax], env: &ResolveEnv) -> Result<Expr> {
    expect_arity(2, args.len())?;

    let params = match &args[0] {
        Syntax::List(xs) => xs
            .iter()
            .map(|p| match p {
                Syntax::Identifier(name) => Ok(name.clone()),
                _ => Err(Error::Parse(
                    "ill-formed special form: lambda parameter must be an identifier".to_string(),
                )),
            })
            .collect::<Result<Vec<_>>>()?,
        _ => {
            return Err(Error::Parse(
                "ill-formed special form: lambda expects a parameter list".to_string(),
            ))
        }
    };

    let mut body_env = env.clone();
    for param in &params {
        body_env = body_env.extend(param.clone(), Value::Void);
    }

    let body = std::rc::Rc::new(resolve(&args[1], &body_env)?);
    Ok(Expr::Lambda { params, body })
}

/// Shared implementation for `let` and `letrec`.
///
/// Both resolve every right-hand side under the *original outer* environment
/// -- neither sees its siblings at resolve time, even `letrec` -- confirmed
/// against the reference parser, where `Letrec`'s resolution is textually
/// identical to `Let`'s. Mutual recursion is entirely an evaluator-time
/// property (see `evaluator.rs`): the body environment accumulates every
/// bound name regardless of form.
fn resolve_let(args: &[Syntax], env: &ResolveEnv, is_letrec: bool) -> Result<Expr> {
    expect_arity(2, args.len())?;

    let header = match &args[0] {
        Syntax::List(xs) => xs,
        _ => {
            return Err(Error::Parse(
                "ill-formed special form: expected a binding list".to_string(),
            ))
        }
    };

    let mut bindings = Vec::with_capacity(header.len());
    let mut body_env = env.clone();

    for binding in header {
        let pair = match binding {
            Syntax::List(xs) => xs,
            _ => {
                return Err(Error::Parse(
                    "ill-formed special form: binding must be a (name expr) pair".to_string(),
                ))
            }
        };
        expect_arity(2, pair.len())?;

        let name = match &pair[0] {
            Syntax::Identifier(name) => name.clone(),
            _ => {
                return Err(Error::Parse(
                    "ill-formed special form: binding name must be an identifier".to_string(),
                ))
            }
        };

        let parsed = resolve(&pair[1], env)?;
        body_env = body_env.extend(name.clone(), Value::Void);
        bindings.push((name, parsed));
    }

    let body = Box::new(resolve(&args[1], &body_env)?);

    Ok(if is_letrec {
        Expr::Letrec { bindings, body }
    } else {
        Expr::Let { bindings, body }
    })
}
