mod cursor;
mod env;
pub mod error;
mod evaluator;
mod expr;
mod ext;
mod handle;
mod lexer;
mod primitives;
mod reader;
mod repr;
mod resolver;
mod span;
mod syntax;
mod token;
mod value;

pub use self::env::Env;
pub use self::error::{Error, Result};
pub use self::evaluator::eval;
pub use self::expr::{Expr, Prim};
pub use self::reader::{read_one, read_program};
pub use self::resolver::resolve;
pub use self::syntax::Syntax;
pub use self::value::{values_eq, Closure, Value};

/// Read, resolve, and evaluate every top-level form in `source` under a
/// single, shared environment, returning each form's value in order.
///
/// Evaluation stops early -- without erroring -- on the first form that
/// produces [`Value::Terminate`], mirroring the REPL's own `(exit)` handling.
pub fn run(source: &str, env: &Env) -> error::Result<Vec<Value>> {
    let forms = read_program(source)?;
    let mut results = Vec::with_capacity(forms.len());

    for syntax in forms {
        let expr = resolve(&syntax, env)?;
        let value = eval(&expr, env)?;
        let stop = matches!(value, Value::Terminate);
        results.push(value);
        if stop {
            break;
        }
    }

    Ok(results)
}
