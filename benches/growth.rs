use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dyn_array::DynArray;

fn bench_push(c: &mut Criterion) {
    c.bench_function("push_1k_cold", |b| {
        b.iter(|| {
            let mut arr = DynArray::<u64>::new();
            for i in 0..1024u64 {
                arr.push(black_box(i)).unwrap();
            }
            black_box(arr.len())
        })
    });

    c.bench_function("push_1k_reserved", |b| {
        b.iter(|| {
            let mut arr = DynArray::<u64>::with_capacity(1024).unwrap();
            for i in 0..1024u64 {
                arr.push(black_box(i)).unwrap();
            }
            black_box(arr.len())
        })
    });
}

fn bench_removal(c: &mut Criterion) {
    c.bench_function("del_fast_drain_1k", |b| {
        b.iter(|| {
            let mut arr = DynArray::<u64>::with_capacity(1024).unwrap();
            for i in 0..1024u64 {
                arr.push(i).unwrap();
            }
            while !arr.is_empty() {
                black_box(arr.del_fast(0).unwrap());
            }
        })
    });

    c.bench_function("del_stable_drain_1k", |b| {
        b.iter(|| {
            let mut arr = DynArray::<u64>::with_capacity(1024).unwrap();
            for i in 0..1024u64 {
                arr.push(i).unwrap();
            }
            while !arr.is_empty() {
                black_box(arr.del_stable(0).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_push, bench_removal);
criterion_main!(benches);
