//! Criterion benchmarks for the annealing loop.
//!
//! Uses synthetic problems (Sphere function, random tour) to measure
//! loop overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_anneal::sa::{Bound, DomainMode, SaConfig, SaRunner, ScheduleKind};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// Cities on a circle, visited in a scrambled order.
fn ring_tour(n: usize) -> (Vec<(f64, f64)>, Vec<usize>) {
    let points = (0..n)
        .map(|i| {
            let a = i as f64 / n as f64 * std::f64::consts::TAU;
            (a.cos(), a.sin())
        })
        .collect();
    let order = (0..n).map(|i| (i * 7) % n).collect();
    (points, order)
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_sphere");
    group.sample_size(10);

    for &dim in &[10usize, 50, 100] {
        let config = SaConfig::new(DomainMode::Continuous)
            .with_max_steps(1000)
            .with_bounds(vec![Bound::new(-5.0, 5.0); dim])
            .with_seed(42);
        let start = vec![2.5; dim];
        group.bench_with_input(BenchmarkId::from_parameter(dim), &(start, config), |b, (s, c)| {
            b.iter(|| {
                let result = SaRunner::minimize(sphere, black_box(s.clone()), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_tour(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_tour");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let (points, order) = ring_tour(n);
        let length = |tour: &[usize]| {
            (0..tour.len())
                .map(|i| {
                    let (x0, y0) = points[tour[i]];
                    let (x1, y1) = points[tour[(i + 1) % tour.len()]];
                    ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
                })
                .sum::<f64>()
        };
        let config = SaConfig::new(DomainMode::Combinatorial)
            .with_cooling(ScheduleKind::Exponential)
            .with_alpha(0.999)
            .with_max_temperature(10.0)
            .with_max_steps(5000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, c| {
            b.iter(|| {
                let result = SaRunner::minimize(length, black_box(order.clone()), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere, bench_tour);
criterion_main!(benches);
