//! Criterion benchmarks for the generational loop.
//!
//! Uses a synthetic knapsack instance to measure operator and replacement
//! overhead independent of any real problem data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_genetic::ga::{
    Crossover, Fitness, GeneRepresentation, Mutation, Population, PopulationConfig, Selection,
};

fn synthetic_knapsack(items: usize) -> Fitness {
    let weights: Vec<f64> = (0..items).map(|i| (i % 7 + 1) as f64).collect();
    let values: Vec<f64> = (0..items).map(|i| (i % 11 + 3) as f64).collect();
    let capacity = weights.iter().sum::<f64>() / 2.0;
    Fitness::knapsack(capacity, weights, values).expect("weights and values align")
}

fn bench_evolve_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_knapsack");
    group.sample_size(10);

    for (items, pop, gen) in [(20usize, 100usize, 50usize), (100, 200, 30), (500, 500, 10)] {
        let fitness = synthetic_knapsack(items);
        let selection = Selection::roulette_wheel(pop / 5);
        let crossover = Crossover::single_point(0.75).expect("valid probability");
        let mutation = Mutation::flip(0.01, GeneRepresentation::Binary).expect("valid probability");
        let config = PopulationConfig::new(GeneRepresentation::Binary, pop, items).with_seed(42);

        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", items, pop, gen), items),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut population = Population::from_config(config).expect("valid config");
                    let history = population
                        .run(gen, &fitness, &selection, &crossover, &mutation)
                        .expect("generation succeeds");
                    black_box(history)
                })
            },
        );
    }
    group.finish();
}

fn bench_roulette_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("roulette_selection");
    group.sample_size(10);

    for &pop in &[100usize, 1_000, 10_000] {
        let config = PopulationConfig::new(GeneRepresentation::Binary, pop, 16).with_seed(7);
        let population = Population::from_config(&config).expect("valid config");
        let selection = Selection::roulette_wheel(pop / 10);
        let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(7);

        group.bench_with_input(BenchmarkId::from_parameter(pop), &population, |b, p| {
            b.iter(|| black_box(selection.select_indices(black_box(p.chromosomes()), &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evolve_knapsack, bench_roulette_selection);
criterion_main!(benches);
