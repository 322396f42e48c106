//! Criterion micro-benchmarks for Kawasaki diffusion.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use littoral_bench::eroded_grid;
use littoral_models::hamiltonian::total_energy;
use littoral_models::{AcceptanceParams, AcceptanceTable, KawasakiDiffusion};
use std::hint::black_box;

/// Benchmark: Build the default acceptance table.
fn bench_acceptance_table(c: &mut Criterion) {
    let params = AcceptanceParams::default();
    c.bench_function("acceptance_table_build", |b| {
        b.iter(|| black_box(AcceptanceTable::new(&params).unwrap()));
    });
}

/// Benchmark: One sweep over a 128x128 eroded coast.
fn bench_single_sweep_128(c: &mut Criterion) {
    let start = eroded_grid(128, 0.6, 3).unwrap();
    let model = KawasakiDiffusion::builder().seed(4).build().unwrap();
    c.bench_function("kawasaki_sweep_128", |b| {
        b.iter_batched(
            || start.clone(),
            |mut grid| black_box(model.run(&mut grid, 1).unwrap()),
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: Total lattice energy of a 256x256 eroded coast.
fn bench_total_energy_256(c: &mut Criterion) {
    let grid = eroded_grid(256, 0.6, 5).unwrap();
    c.bench_function("total_energy_256", |b| {
        b.iter(|| black_box(total_energy(&grid)));
    });
}

criterion_group!(
    benches,
    bench_acceptance_table,
    bench_single_sweep_128,
    bench_total_energy_256
);
criterion_main!(benches);
