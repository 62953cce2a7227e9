//! Criterion benchmarks for loadout search and ranking.
//!
//! Uses seeded synthetic catalogs so that timings reflect enumeration and
//! ranking cost independent of any real item data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_loadout::catalog::{Attribute, Attributes, Catalog, Item, Slot};
use u_loadout::ranking::Ranker;
use u_loadout::search::{SearchRequest, SearchRunner, WeightClass};

// ===========================================================================
// Synthetic catalog: `per_slot` items in each of the four slots
// ===========================================================================

fn synthetic_catalog(per_slot: usize, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut catalog = Catalog::new();
    for slot in Slot::ALL {
        for i in 0..per_slot {
            let attributes = Attributes::from_fn(|_| rng.random_range(0.0..40.0));
            let item = Item::new(format!("{slot} {i}"), rng.random_range(1.0..25.0))
                .with_availability(if rng.random_bool(0.8) { "Base Game" } else { "DLC" })
                .with_attributes(attributes);
            catalog.insert(slot, item);
        }
    }
    catalog
}

fn request() -> SearchRequest {
    SearchRequest::default()
        .with_max_capacity(120.0)
        .with_carried_load(20.0)
        .with_weight_class(WeightClass::Medium)
        .with_dimensions(["poise", "negation", "resistance"])
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for &per_slot in &[5usize, 10, 20] {
        let catalog = synthetic_catalog(per_slot, 42);
        let request = request();
        group.bench_with_input(
            BenchmarkId::from_parameter(per_slot),
            &(catalog, request),
            |b, (cat, req)| {
                b.iter(|| {
                    let result = SearchRunner::run(black_box(cat), black_box(req));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_search_and_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_and_rank");
    group.sample_size(10);

    for &per_slot in &[5usize, 10, 20] {
        let catalog = synthetic_catalog(per_slot, 7);
        let request = request();
        group.bench_with_input(
            BenchmarkId::from_parameter(per_slot),
            &(catalog, request),
            |b, (cat, req)| {
                b.iter(|| {
                    let report = SearchRunner::run_ranked(black_box(cat), black_box(req));
                    black_box(report)
                })
            },
        );
    }
    group.finish();
}

fn bench_rank_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    group.sample_size(10);

    let catalog = synthetic_catalog(15, 3);
    let request = request().with_weight_class(WeightClass::Heavy);
    let ranker = Ranker::for_dimensions(&request.dimensions);
    let poise = [u_loadout::scoring::Dimension::Stat(Attribute::Poise)];
    let poise_only = Ranker::for_dimensions(&poise);

    group.bench_function("three_keys", |b| {
        b.iter_batched(
            || SearchRunner::run(&catalog, &request).map(|r| r.combinations).unwrap_or_default(),
            |combos| black_box(ranker.rank(combos)),
            criterion::BatchSize::LargeInput,
        )
    });
    group.bench_function("one_key", |b| {
        b.iter_batched(
            || SearchRunner::run(&catalog, &request).map(|r| r.combinations).unwrap_or_default(),
            |combos| black_box(poise_only.rank(combos)),
            criterion::BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_search, bench_search_and_rank, bench_rank_only);
criterion_main!(benches);
