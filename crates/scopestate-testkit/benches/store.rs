//! Read-path benchmarks: the lookups stages perform many times per scope.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scopestate::ScopeState;
use scopestate_testkit::{SimpleType, A, C};

fn populated() -> ScopeState {
    let mut state = ScopeState::new();
    for i in 0..64 {
        state.set_data(&format!("data_{i}"), SimpleType(i)).unwrap();
    }
    state.set_data("leaf", C::new(1)).unwrap();
    for i in 0..256 {
        state.add_to_list("items", SimpleType(i)).unwrap();
    }
    state
}

fn bench_get_data(c: &mut Criterion) {
    let state = populated();

    c.bench_function("get_data exact type", |b| {
        b.iter(|| state.get_data::<SimpleType>(black_box("data_17")).unwrap().0)
    });

    c.bench_function("get_data as ancestor", |b| {
        b.iter(|| state.get_data::<A>(black_box("leaf")).unwrap().id)
    });

    c.bench_function("has_data miss", |b| {
        b.iter(|| state.has_data::<SimpleType>(black_box("missing")))
    });
}

fn bench_for_each(c: &mut Criterion) {
    let state = populated();

    c.bench_function("for_each_list_item 256", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            state
                .for_each_list_item::<SimpleType, _>(black_box("items"), |item| {
                    sum += i64::from(item.0);
                    true
                })
                .unwrap();
            sum
        })
    });
}

criterion_group!(benches, bench_get_data, bench_for_each);
criterion_main!(benches);
