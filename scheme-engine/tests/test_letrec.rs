use scheme_engine::{eval, read_one, resolve, Env, Value};

fn run(source: &str) -> Value {
    let env = Env::empty();
    let expr = resolve(&read_one(source).unwrap(), &env).unwrap();
    eval(&expr, &env).unwrap()
}

#[test]
fn mutual_recursion() {
    // Scenario d / law 5.
    let source = "(letrec ((even? (lambda (n) (if (= n 0) #t (odd? (- n 1)))))
                             (odd? (lambda (n) (if (= n 0) #f (even? (- n 1))))))
                    (even? 10))";
    assert!(matches!(run(source), Value::Boolean(true)));
}

#[test]
fn self_recursive_factorial() {
    let source = "(letrec ((fact (lambda (n) (if (= n 0) 1 (* n (fact (- n 1)))))))
                    (fact 6))";
    assert!(matches!(run(source), Value::Integer(720)));
}
