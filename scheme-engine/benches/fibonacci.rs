use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scheme_engine::{eval, read_one, resolve, Env};

fn fibonacci_benchmark(c: &mut Criterion) {
    let source = include_str!("fibonacci.scm");
    let env = Env::empty();
    let syntax = read_one(source).unwrap();
    let expr = resolve(&syntax, &env).unwrap();

    c.bench_function("fib 20", |b| b.iter(|| eval(black_box(&expr), black_box(&env))));
}

criterion_group!(benches, fibonacci_benchmark);
criterion_main!(benches);
