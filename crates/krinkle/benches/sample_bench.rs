//! Criterion microbenches for the parameter sampler and sample-then-build.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use krinkle::sample::{draw_params, ParamBounds, ReplayToken};
use krinkle::Tiling;

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let bounds = ParamBounds::default();
    group.bench_function(BenchmarkId::new("draw_params", "ui"), |b| {
        b.iter_batched(
            || ReplayToken { seed: 42, index: 0 },
            |tok| draw_params(bounds, tok.advance()),
            BatchSize::SmallInput,
        )
    });
    let small = ParamBounds {
        k: (2, 12),
        layers: (1, 4),
        ..ParamBounds::default()
    };
    group.bench_function(BenchmarkId::new("draw_and_build", "k2-12"), |b| {
        let mut tok = ReplayToken { seed: 7, index: 0 };
        b.iter(|| {
            tok = tok.advance();
            Tiling::new(&draw_params(small, tok)).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
