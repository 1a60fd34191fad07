//! Criterion benchmarks for the tour solver.
//!
//! Uses synthetic target layouts (uniform scatter plus feeder-like rows)
//! to measure solve throughput for both cost metrics under a fixed
//! iteration budget.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_travel::cost::{AxisParams, KinematicCost};
use u_travel::geom::Point;
use u_travel::tour::{TourConfig, TourSolver};

/// Targets roughly arranged like a pick-and-place table: random scatter
/// plus X-aligned feeder rows.
fn machine_layout(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                Point::new(
                    rng.random_range(0.0..1000.0),
                    rng.random_range(0.0..500.0),
                    rng.random_range(0.0..20.0),
                )
            } else {
                Point::new(
                    (rng.random_range(0.0..5.0)).floor() * 250.0 + rng.random_range(0.0..20.0),
                    rng.random_range(0.0..500.0),
                    rng.random_range(0.0..10.0),
                )
            }
        })
        .collect()
}

fn bench_euclidean_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_euclidean");
    for &n in &[50usize, 200] {
        let points = machine_layout(n, 42);
        let config = TourConfig::default().with_max_iterations(100_000);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let mut solver = TourSolver::new(
                    points.clone(),
                    Some(Point::new(0.0, 0.0, 0.0)),
                    None,
                );
                black_box(solver.solve_with(&config).best_cost)
            })
        });
    }
    group.finish();
}

fn bench_kinematic_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_kinematic");
    for &n in &[50usize, 200] {
        let points = machine_layout(n, 42);
        let config = TourConfig::default().with_max_iterations(100_000);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let model = KinematicCost::new(
                    AxisParams::new(3000.0, 500.0).unwrap(),
                    AxisParams::new(500.0, 500.0).unwrap(),
                )
                .with_z_axis(AxisParams::new(1000.0, 200.0).unwrap());
                let mut solver = TourSolver::with_cost_model(
                    points.clone(),
                    Some(Point::new(0.0, 0.0, 0.0)),
                    None,
                    model,
                );
                black_box(solver.solve_with(&config).best_cost)
            })
        });
    }
    group.finish();
}

fn bench_total_cost(c: &mut Criterion) {
    let points = machine_layout(500, 7);
    let solver = TourSolver::new(points, None, None);
    c.bench_function("total_cost_500", |b| b.iter(|| black_box(solver.total_cost())));
}

criterion_group!(
    benches,
    bench_euclidean_solve,
    bench_kinematic_solve,
    bench_total_cost
);
criterion_main!(benches);
