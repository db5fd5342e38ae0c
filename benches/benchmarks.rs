use std::iter;

use criterion::Criterion;
use slotbloom::{Filter, FilterBuilder, KeyHasher, SipHash};

const CAPACITIES: [usize; 8] = [1009, 1013, 1019, 1021, 1031, 1033, 1039, 1049];

fn key() -> String {
    let rng = fastrand::Rng::new();
    iter::repeat_with(|| rng.lowercase()).take(32).collect()
}

fn populate<H: KeyHasher>(filter: &mut Filter<H>, n: usize) {
    for _ in 0..n {
        let item = key();
        filter.add(&item);
    }
}

fn bench_filter_add(c: &mut Criterion) {
    c.bench_function("add-rolling", |b| {
        let mut filter = Filter::new(&CAPACITIES).unwrap();

        b.iter(|| {
            let item = key();
            filter.add(&item);
        });
    });

    c.bench_function("add-siphash", |b| {
        let mut filter = FilterBuilder::new(CAPACITIES)
            .hasher(SipHash::default())
            .build()
            .unwrap();

        b.iter(|| {
            let item = key();
            filter.add(&item);
        });
    });
}

fn bench_filter_contains(c: &mut Criterion) {
    c.bench_function("contains-1000", |b| {
        let mut filter = Filter::new(&CAPACITIES).unwrap();
        populate(&mut filter, 1000);

        b.iter(|| {
            let item = key();
            filter.contains(&item);
        });
    });

    c.bench_function("contains-10000", |b| {
        let mut filter = Filter::new(&CAPACITIES).unwrap();
        populate(&mut filter, 10000);

        b.iter(|| {
            let item = key();
            filter.contains(&item);
        });
    });
}

criterion::criterion_group!(benches, bench_filter_add, bench_filter_contains);
criterion::criterion_main!(benches);
