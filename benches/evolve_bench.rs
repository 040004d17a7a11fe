//! Criterion benchmarks for the evolutionary TSP engine.
//!
//! Uses synthetic Euclidean instances on a ring so the optimal tour is
//! known and the work per generation is representative.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_evo::{Crossover, DistanceMatrix, EvolveConfig, EvolveRunner, Selection};

/// Locations evenly spaced on a circle of the given radius.
fn ring_instance(n: usize) -> DistanceMatrix {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            (100.0 * angle.cos(), 100.0 * angle.sin())
        })
        .collect();
    DistanceMatrix::from_points(&points)
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");

    for &n in &[10, 20, 40] {
        let matrix = ring_instance(n);
        for (label, selection, crossover) in [
            ("truncation_twin", Selection::Truncation, Crossover::Twin),
            (
                "roulette_single",
                Selection::Roulette,
                Crossover::SingleChild,
            ),
        ] {
            let config = EvolveConfig::new(n)
                .with_population_size(30)
                .with_max_generations(50)
                .with_selection(selection)
                .with_crossover(crossover)
                .with_seed(42);

            group.bench_with_input(BenchmarkId::new(label, n), &matrix, |b, matrix| {
                b.iter(|| {
                    let result = EvolveRunner::run(black_box(matrix), black_box(&config))
                        .expect("valid config");
                    black_box(result.best_distance)
                })
            });
        }
    }

    group.finish();
}

fn bench_single_generation_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_generation");

    for &pop in &[50usize, 100, 200] {
        let matrix = ring_instance(25);
        let config = EvolveConfig::new(25)
            .with_population_size(pop)
            .with_max_generations(1)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, config| {
            b.iter(|| {
                let result =
                    EvolveRunner::run(black_box(&matrix), black_box(config)).expect("valid config");
                black_box(result.generations)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evolution, bench_single_generation_scaling);
criterion_main!(benches);
