//! Benchmarks for the staggered central scheme.
//!
//! Run with: `cargo bench --bench step_bench`
//!
//! Covers the halo refresh, the conservation check, and a full super-step
//! on the circular dam break at several grid sizes.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use central_rs::{
    apply_periodic, CellField, Central2D, DamBreak, GridGeometry, ShallowWater2D, SolverConfig,
};

/// Dam-break solver on an n x n grid over the 2 x 2 domain.
fn setup_sim(n: usize) -> Central2D<ShallowWater2D, 3> {
    let config = SolverConfig::new(2.0, 2.0, n, n).with_theta(2.0);
    let mut sim = Central2D::new(ShallowWater2D::default(), config).unwrap();
    let dam = DamBreak::default();
    sim.init(|u, x, y| dam.apply(u, x, y));
    sim
}

/// Benchmark one super-step (two staggered sub-steps).
fn bench_superstep(c: &mut Criterion) {
    let mut group = c.benchmark_group("superstep");

    for n in [50, 100, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || setup_sim(n),
                |mut sim| {
                    // A tiny horizon forces exactly one clamped super-step.
                    let tfinal = sim.time() + 1e-6;
                    sim.run(tfinal).unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

/// Benchmark the periodic halo refresh alone.
fn bench_halo_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("halo_refresh");

    for n in [100, 200] {
        let geom = GridGeometry::new(2.0, 2.0, n, n);
        let mut u: CellField<3> = CellField::new(geom.nx_all, geom.ny_all);
        for (i, cell) in u.cells_mut().iter_mut().enumerate() {
            *cell = [1.0 + (i % 7) as f64, 0.1, -0.1];
        }

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| apply_periodic(&mut u, &geom))
        });
    }
    group.finish();
}

/// Benchmark the conservation sweep.
fn bench_solution_check(c: &mut Criterion) {
    let sim = setup_sim(200);
    c.bench_function("solution_check/200", |b| {
        b.iter(|| sim.solution_check().unwrap())
    });
}

criterion_group!(
    benches,
    bench_superstep,
    bench_halo_refresh,
    bench_solution_check
);
criterion_main!(benches);
