//! Criterion micro-benchmarks for invasion percolation building blocks.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use littoral_core::Grid;
use littoral_models::{GrowthFrontier, InvasionPercolation, RandomField};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Benchmark: Draw a 256x256 incursion field.
fn bench_random_field_256(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    c.bench_function("random_field_256", |b| {
        b.iter(|| {
            let field = RandomField::generate(256, 0.6, &mut rng).unwrap();
            black_box(&field);
        });
    });
}

/// Benchmark: Rebuild the frontier of a 256x256 split coast.
fn bench_frontier_rebuild_256(c: &mut Criterion) {
    let grid = Grid::split(256).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let field = RandomField::generate(256, 0.6, &mut rng).unwrap();
    c.bench_function("frontier_rebuild_256", |b| {
        b.iter(|| black_box(GrowthFrontier::rebuild(&grid, &field)));
    });
}

/// Benchmark: Full invasion run to the boundary, 128x128 and 256x256.
fn bench_invasion_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("invasion_run");
    group.sample_size(20);
    for size in [128u32, 256] {
        let model = InvasionPercolation::builder()
            .erosion_bias(0.6)
            .seed(7)
            .build()
            .unwrap();
        group.bench_function(format!("split_{size}"), |b| {
            b.iter_batched(
                || Grid::split(size).unwrap(),
                |mut grid| black_box(model.run(&mut grid).unwrap()),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_random_field_256,
    bench_frontier_rebuild_256,
    bench_invasion_run
);
criterion_main!(benches);
