//! Population and the generational loop.
//!
//! [`Population`] owns the chromosomes and runs one generation per
//! [`evolve`](Population::evolve) call:
//! evaluate → select → crossover → mutate → replace-weakest.
//!
//! Each stage finishes before the next one starts. All intermediate work
//! happens on scratch vectors; the chromosome collection is swapped in a
//! single assignment at the end, so a failing generation leaves the
//! population untouched.

use super::config::PopulationConfig;
use super::crossover::Crossover;
use super::error::{GaError, Result};
use super::fitness::Fitness;
use super::mutation::Mutation;
use super::selection::Selection;
use super::types::{Chromosome, GeneRepresentation};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, trace};

/// Summary of the population after a generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Number of completed generations.
    pub generation: usize,
    pub best_fitness: f64,
    pub average_fitness: f64,
    pub worst_fitness: f64,
}

/// A fixed-size collection of chromosomes evolved generation by generation.
///
/// # Usage
///
/// ```
/// use u_genetic::ga::{
///     Crossover, Fitness, GeneRepresentation, Mutation, Population, PopulationConfig, Selection,
/// };
///
/// let fitness = Fitness::knapsack(10.0, vec![5.0, 4.0, 3.0], vec![10.0, 40.0, 30.0]).unwrap();
/// let selection = Selection::roulette_wheel(10);
/// let crossover = Crossover::single_point(0.75).unwrap();
/// let mutation = Mutation::flip(0.1, GeneRepresentation::Binary).unwrap();
///
/// let config = PopulationConfig::new(GeneRepresentation::Binary, 50, 3).with_seed(42);
/// let mut population = Population::from_config(&config).unwrap();
/// for _ in 0..20 {
///     population.evolve(&fitness, &selection, &crossover, &mutation).unwrap();
/// }
/// println!("best: {}", population.fittest().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
    representation: GeneRepresentation,
    population_size: usize,
    chromosome_length: usize,
    parallel: bool,
    generation: usize,
    rng: StdRng,
}

impl Population {
    /// Creates a randomly initialized population with a random seed.
    pub fn new(
        representation: GeneRepresentation,
        population_size: usize,
        chromosome_length: usize,
    ) -> Result<Self> {
        Self::from_config(&PopulationConfig::new(
            representation,
            population_size,
            chromosome_length,
        ))
    }

    /// Creates a randomly initialized population from a configuration.
    pub fn from_config(config: &PopulationConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let chromosomes = (0..config.population_size)
            .map(|_| Chromosome::random(config.representation, config.chromosome_length, &mut rng))
            .collect();
        Ok(Self::assemble(config, chromosomes, rng))
    }

    /// Creates a population from explicit chromosomes.
    ///
    /// The chromosomes must match the configured size, length and
    /// representation, and every gene must lie in its representation's
    /// range.
    pub fn with_chromosomes(config: &PopulationConfig, chromosomes: Vec<Chromosome>) -> Result<Self> {
        config.validate()?;
        if chromosomes.len() != config.population_size {
            return Err(GaError::InvalidConfig(format!(
                "expected {} chromosomes, got {}",
                config.population_size,
                chromosomes.len()
            )));
        }
        for c in &chromosomes {
            if c.representation() != config.representation {
                return Err(GaError::RepresentationMismatch {
                    expected: config.representation,
                    actual: c.representation(),
                });
            }
            if c.len() != config.chromosome_length {
                return Err(GaError::GeneLengthMismatch {
                    expected: config.chromosome_length,
                    actual: c.len(),
                });
            }
            c.genes().validate()?;
        }
        Ok(Self::assemble(config, chromosomes, create_rng(config.seed)))
    }

    fn assemble(config: &PopulationConfig, chromosomes: Vec<Chromosome>, rng: StdRng) -> Self {
        Self {
            chromosomes,
            representation: config.representation,
            population_size: config.population_size,
            chromosome_length: config.chromosome_length,
            parallel: config.parallel,
            generation: 0,
            rng,
        }
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn representation(&self) -> GeneRepresentation {
        self.representation
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    /// Whether fitness evaluation runs on the rayon pool.
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Runs one generation and returns the new chromosome collection.
    ///
    /// On error the population is left exactly as it was before the call.
    pub fn evolve(
        &mut self,
        fitness: &Fitness,
        selection: &Selection,
        crossover: &Crossover,
        mutation: &Mutation,
    ) -> Result<&[Chromosome]> {
        if mutation.representation() != self.representation {
            return Err(GaError::RepresentationMismatch {
                expected: self.representation,
                actual: mutation.representation(),
            });
        }
        if let Some(expected) = fitness.expected_length() {
            if expected != self.chromosome_length {
                return Err(GaError::GeneLengthMismatch {
                    expected,
                    actual: self.chromosome_length,
                });
            }
        }

        // EVALUATE
        let mut current = self.chromosomes.clone();
        let scores = self.score(fitness, &current)?;
        for (c, score) in current.iter_mut().zip(scores) {
            c.set_fitness(score);
        }

        // SELECT
        let mating_pool = selection.select(&current, &mut self.rng)?;
        trace!(mating_pool = mating_pool.len(), "selection done");

        // Each crossover yields two offspring.
        let offspring_count = mating_pool.len() * 2;
        if offspring_count > self.population_size {
            return Err(GaError::OffspringExceedPopulation {
                offspring: offspring_count,
                population_size: self.population_size,
            });
        }

        // CROSSOVER
        let mut offspring = Vec::with_capacity(offspring_count);
        for _ in 0..mating_pool.len() {
            let parents: Vec<Chromosome> = (0..2)
                .filter_map(|_| mating_pool.choose(&mut self.rng).cloned())
                .collect();
            offspring.extend(crossover.cross_over(&parents, &mut self.rng)?);
        }
        trace!(offspring = offspring.len(), "crossover done");

        // MUTATE
        for child in &mut offspring {
            mutation.perform_mutation(child, &mut self.rng)?;
        }

        // Committed offspring always carry fresh scores.
        let offspring_scores = self.score(fitness, &offspring)?;
        for (c, score) in offspring.iter_mut().zip(offspring_scores) {
            c.set_fitness(score);
        }

        // REPLACE
        let mut evicted = vec![false; current.len()];
        for i in ranked(&current, Ordering::Less)
            .into_iter()
            .take(offspring.len())
        {
            evicted[i] = true;
        }
        let mut next: Vec<Chromosome> = current
            .into_iter()
            .zip(evicted)
            .filter_map(|(c, gone)| (!gone).then_some(c))
            .collect();
        next.extend(offspring);

        self.chromosomes = next;
        self.generation += 1;

        let stats = self.stats();
        debug!(
            generation = stats.generation,
            best = stats.best_fitness,
            average = stats.average_fitness,
            "generation complete"
        );

        Ok(self.chromosomes.as_slice())
    }

    /// Runs `generations` generations and returns the statistics recorded
    /// after each one.
    pub fn run(
        &mut self,
        generations: usize,
        fitness: &Fitness,
        selection: &Selection,
        crossover: &Crossover,
        mutation: &Mutation,
    ) -> Result<Vec<GenerationStats>> {
        let mut history = Vec::with_capacity(generations);
        for _ in 0..generations {
            self.evolve(fitness, selection, crossover, mutation)?;
            history.push(self.stats());
        }
        Ok(history)
    }

    /// The `k` fittest chromosomes, best first. Ties keep population order.
    pub fn fittest_chromosomes(&self, k: usize) -> Vec<&Chromosome> {
        ranked(&self.chromosomes, Ordering::Greater)
            .into_iter()
            .take(k)
            .map(|i| &self.chromosomes[i])
            .collect()
    }

    /// The single fittest chromosome.
    pub fn fittest(&self) -> Option<&Chromosome> {
        self.fittest_chromosomes(1).into_iter().next()
    }

    /// The `k` least fit chromosomes, worst first. Ties keep population order.
    pub fn least_fit_chromosomes(&self, k: usize) -> Vec<&Chromosome> {
        ranked(&self.chromosomes, Ordering::Less)
            .into_iter()
            .take(k)
            .map(|i| &self.chromosomes[i])
            .collect()
    }

    /// Arithmetic mean of the stored fitness values.
    pub fn average_fitness(&self) -> f64 {
        if self.chromosomes.is_empty() {
            return 0.0;
        }
        self.chromosomes.iter().map(Chromosome::fitness).sum::<f64>() / self.chromosomes.len() as f64
    }

    pub fn stats(&self) -> GenerationStats {
        let (best, worst) = self
            .chromosomes
            .iter()
            .map(Chromosome::fitness)
            .fold((f64::NEG_INFINITY, f64::INFINITY), |(hi, lo), f| {
                (hi.max(f), lo.min(f))
            });
        GenerationStats {
            generation: self.generation,
            best_fitness: best,
            average_fitness: self.average_fitness(),
            worst_fitness: worst,
        }
    }

    fn score(&self, fitness: &Fitness, chromosomes: &[Chromosome]) -> Result<Vec<f64>> {
        #[cfg(feature = "parallel")]
        if self.is_parallel() {
            return chromosomes.par_iter().map(|c| fitness.evaluate(c)).collect();
        }

        chromosomes.iter().map(|c| fitness.evaluate(c)).collect()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Chromosomes: [")?;
        for (i, c) in self.chromosomes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Positions sorted by fitness: ascending for `Ordering::Less`, descending
/// for `Ordering::Greater`. The sort is stable.
fn ranked(chromosomes: &[Chromosome], order: Ordering) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..chromosomes.len()).collect();
    indices.sort_by(|&a, &b| {
        let cmp = chromosomes[a].fitness().total_cmp(&chromosomes[b].fitness());
        if order == Ordering::Greater {
            cmp.reverse()
        } else {
            cmp
        }
    });
    indices
}
