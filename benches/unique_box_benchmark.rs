use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tenure::UniqueBox;

fn bench_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("UniqueBox vs Box: create+drop");

    group.bench_function("Box::new", |b| {
        b.iter(|| {
            black_box(Box::new(black_box(42_u64)));
        })
    });

    group.bench_function("UniqueBox::new", |b| {
        b.iter(|| {
            black_box(UniqueBox::new(black_box(42_u64)));
        })
    });

    group.finish();
}

fn bench_deref(c: &mut Criterion) {
    let mut group = c.benchmark_group("UniqueBox vs Box: deref");

    let boxed = Box::new(42_u64);
    group.bench_function("Box deref", |b| {
        b.iter(|| black_box(**black_box(&boxed)));
    });

    let unique = UniqueBox::new(42_u64);
    group.bench_function("UniqueBox deref", |b| {
        b.iter(|| black_box(**black_box(&unique)));
    });

    group.finish();
}

fn bench_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("UniqueBox reset");

    group.bench_function("reset_box", |b| {
        b.iter_batched(
            || UniqueBox::new(0_u64),
            |mut h| {
                h.reset_box(Box::new(1_u64));
                h
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("release + readopt", |b| {
        b.iter_batched(
            || UniqueBox::new(0_u64),
            |mut h| {
                if let Some(p) = h.release() {
                    // SAFETY: released and readopted immediately, unchanged.
                    unsafe { h.reset_raw(p.as_ptr()) };
                }
                h
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_slice_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("UniqueBox vs Box: slice create+drop");

    group.bench_function("Vec into_boxed_slice", |b| {
        b.iter_batched(
            || vec![7_u32; 128],
            |v| black_box(v.into_boxed_slice()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("UniqueBox::from_vec", |b| {
        b.iter_batched(
            || vec![7_u32; 128],
            |v| black_box(UniqueBox::from_vec(v)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_creation,
    bench_deref,
    bench_reset,
    bench_slice_creation
);
criterion_main!(benches);
