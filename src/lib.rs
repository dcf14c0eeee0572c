//! Generic genetic algorithm engine.
//!
//! A population of candidate solutions is evolved across generations by
//! repeatedly applying pluggable strategies:
//!
//! - **Fitness**: problem-specific scoring of a gene sequence
//! - **Selection**: choosing a mating pool biased toward higher fitness
//! - **Crossover**: recombining two parents into offspring
//! - **Mutation**: randomly perturbing genes to maintain diversity
//!
//! Callers construct one strategy per operator kind and a
//! [`Population`](ga::Population), then call
//! [`evolve`](ga::Population::evolve) once per generation and read back the
//! fittest chromosomes and average fitness.
//!
//! All randomness flows from a generator owned by the population and seeded
//! from [`PopulationConfig::seed`](ga::PopulationConfig::seed), so one seed
//! reproduces a whole run.
//!
//! # Features
//!
//! - `parallel`: evaluate fitness on the rayon thread pool
//! - `serde`: `Serialize`/`Deserialize` for configuration, genes and operators

pub mod ga;
