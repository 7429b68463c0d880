#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::{collections::HashMap, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use linprobe::LinearProbingMap;
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut probing_map = LinearProbingMap::new();
    let mut rust_map = HashMap::new();
    group.bench_function("linear probing put", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                probing_map.put(key, value);
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("linear probing get", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for (key, _) in &items {
                if probing_map.get(black_box(key)).is_ok() {
                    hits += 1;
                }
            }
            hits
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for (key, _) in &items {
                if rust_map.get(black_box(key)).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });
    group.bench_function("linear probing remove and re-put", |b| {
        b.iter(|| {
            for (key, value) in &items {
                if probing_map.remove(key).is_ok() {
                    probing_map.put(key.clone(), value.clone());
                }
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
