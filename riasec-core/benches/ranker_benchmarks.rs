//! Criterion benchmarks for occupation ranking.
//!
//! Measures full-catalog ranking for catalogs of 100, 1 000 and 10 000
//! occupations. Reference rows are drawn from a seeded RNG so runs are
//! comparable.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package riasec-core
//! ```

#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use riasec_core::test_support::reference_catalog;
use riasec_core::{InterestProfile, OccupationRanker, ProfileVector, ReferenceCatalog};

/// Seed for deterministic catalog generation.
const BENCHMARK_SEED: u64 = 42;

/// Catalog sizes to benchmark.
const CATALOG_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Upper bound of generated reference values, matching a 1 to 7 scale.
const REFERENCE_CEILING: f64 = 7.0;

fn generate_catalog(size: usize, seed: u64) -> ReferenceCatalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let codes: Vec<String> = (0..size).map(|i| format!("{i:02}-0000.00")).collect();
    let rows: Vec<(&str, ProfileVector)> = codes
        .iter()
        .map(|code| {
            let values: ProfileVector =
                std::array::from_fn(|_| rng.gen_range(1.0..REFERENCE_CEILING));
            (code.as_str(), values)
        })
        .collect();
    reference_catalog(&rows)
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let ranker = OccupationRanker::new();
    let Ok(profile) = InterestProfile::from_totals([32, 18, 7, 25, 12, 30]) else {
        return;
    };

    for &size in CATALOG_SIZES {
        let catalog = generate_catalog(size, BENCHMARK_SEED);
        #[expect(
            clippy::as_conversions,
            reason = "catalog sizes are small enough to fit in u64"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("occupations", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "only ranking time is measured"
                )]
                let _ = ranker.top_k(&profile, &catalog, 5);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
