use scheme_engine::{eval, read_one, resolve, Env, Value};

fn run(source: &str) -> Value {
    let env = Env::empty();
    let expr = resolve(&read_one(source).unwrap(), &env).unwrap();
    eval(&expr, &env).unwrap()
}

#[test]
fn car_cdr_of_a_fresh_pair() {
    // Scenario g.
    assert!(matches!(run("(car (cons 'a 'b))"), Value::Symbol(s) if s == "a"));
    assert!(matches!(run("(cdr (cons 'a 'b))"), Value::Symbol(s) if s == "b"));
}

#[test]
fn pair_predicate() {
    assert!(matches!(run("(pair? (cons 1 2))"), Value::Boolean(true)));
    assert!(matches!(run("(pair? 5)"), Value::Boolean(false)));
}

#[test]
fn eq_is_identity_not_structural() {
    assert!(matches!(
        run("(let ((p (cons 1 2))) (eq? p p))"),
        Value::Boolean(true)
    ));
    assert!(matches!(
        run("(eq? (cons 1 2) (cons 1 2))"),
        Value::Boolean(false)
    ));
}

#[test]
fn eq_on_quoted_symbols() {
    // Law 3.
    assert!(matches!(run("(eq? 'sym 'sym)"), Value::Boolean(true)));
}
