//! Strategy comparison on the canonical and non-canonical 189 scenarios.
//!
//! Run with:
//! ```bash
//! cargo bench --bench coin_change
//! ```

use std::hint::black_box;

use change_making::cs::dynamic::coin_change::SearchLimits;
use change_making::harness::Strategy;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const SYSTEMS: [(&str, [u64; 5]); 2] = [
    ("canonical", [1, 5, 10, 25, 100]),
    ("non_canonical", [3, 8, 10, 25, 100]),
];

fn bench_strategies(c: &mut Criterion) {
    let limits = SearchLimits::default();
    for (label, denominations) in SYSTEMS {
        let mut group = c.benchmark_group(format!("change_189_{}", label));
        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::from_parameter(strategy.name()),
                &denominations,
                |b, denominations| {
                    b.iter(|| strategy.solve(black_box(denominations), black_box(189), &limits))
                },
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
