//! Benchmark for the curry engine and the lazy operator pipeline.
//!
//! Measures partial application overhead and a map/filter/take chain over
//! materialized and generated sequences.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ramdars::seq::Seq;
use ramdars::value::Value;
use ramdars::{combinator, ops};
use std::hint::black_box;

fn int_values(count: i64) -> Value {
    Value::Seq(Seq::from_values((0..count).map(Value::Int)))
}

// =============================================================================
// Curry Engine Benchmarks
// =============================================================================

fn benchmark_curry_application(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_application");

    group.bench_function("full_application", |bencher| {
        let add = ops::curried::add();
        bencher.iter(|| {
            let result = add
                .call(&[Value::Int(black_box(2)), Value::Int(3)])
                .expect("full application");
            black_box(result)
        });
    });

    group.bench_function("partial_then_full", |bencher| {
        let add = ops::curried::add();
        bencher.iter(|| {
            let add_two = add.call(&[Value::Int(black_box(2))]).expect("partial");
            let result = add_two.call(&[Value::Int(3)]).expect("full");
            black_box(result)
        });
    });

    group.bench_function("over_application", |bencher| {
        let add = ops::curried::add();
        bencher.iter(|| {
            let result = add
                .call(&[Value::Int(black_box(2)), Value::Int(3), Value::Int(4)])
                .expect("extras dropped");
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Lazy Pipeline Benchmarks
// =============================================================================

fn benchmark_lazy_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_pipeline");

    for size in [100i64, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("map_filter_take", size),
            &size,
            |bencher, &size| {
                let double = ops::curried::multiply()
                    .call(&[Value::Int(2)])
                    .expect("partial");
                let even = Value::closure(|arguments: &[Value]| match arguments.first() {
                    Some(Value::Int(number)) => Ok(Value::Bool(number % 2 == 0)),
                    _ => Err(ramdars::Error::NotANumber),
                });
                bencher.iter(|| {
                    let source = int_values(size);
                    let mapped = ops::map(&double, &source).expect("map");
                    let filtered = ops::filter(&even, &mapped).expect("filter");
                    let taken = ops::take(&Value::Int(size / 2), &filtered).expect("take");
                    let result = ramdars::seq::materialize(&taken).expect("drain");
                    black_box(result)
                });
            },
        );
    }

    group.bench_function("reduce_sum_10k", |bencher| {
        bencher.iter(|| {
            let source = int_values(10_000);
            let total = ops::sum(&source).expect("sum");
            black_box(total)
        });
    });

    group.finish();
}

// =============================================================================
// Trampoline Benchmark
// =============================================================================

fn benchmark_trampoline(criterion: &mut Criterion) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut group = criterion.benchmark_group("trampoline");

    group.bench_function("countdown_10k", |bencher| {
        bencher.iter(|| {
            let slot: Rc<RefCell<Option<Value>>> = Rc::new(RefCell::new(None));
            let inner = Rc::clone(&slot);
            let countdown = Value::closure(move |arguments: &[Value]| {
                let Some(Value::Int(remaining)) = arguments.first() else {
                    return Err(ramdars::Error::NotANumber);
                };
                if *remaining == 0 {
                    return Ok(Value::Int(0));
                }
                let next = Value::Int(remaining - 1);
                match &*inner.borrow() {
                    Some(wrapper) => wrapper.call(&[next]),
                    None => Err(ramdars::Error::NotInvokable),
                }
            });
            let wrapper = combinator::trampoline(&countdown).expect("invokable");
            *slot.borrow_mut() = Some(wrapper.clone());
            let result = wrapper.call(&[Value::Int(black_box(10_000))]).expect("runs");
            black_box(result)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_curry_application,
    benchmark_lazy_pipeline,
    benchmark_trampoline
);
criterion_main!(benches);
