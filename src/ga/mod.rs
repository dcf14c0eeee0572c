//! Genetic Algorithm engine.
//!
//! A fixed-size [`Population`] of [`Chromosome`]s is evolved one generation
//! at a time by four pluggable operators. Each operator kind is a closed
//! enum of strategies; adding a strategy means adding a variant.
//!
//! # Operators
//!
//! - [`Fitness`]: scores a chromosome (knapsack)
//! - [`Selection`]: builds the mating pool (roulette wheel, tournament)
//! - [`Crossover`]: recombines two parents into two offspring (single point, uniform)
//! - [`Mutation`]: perturbs an offspring in place (flip)
//!
//! # Generation
//!
//! evaluate → select → crossover → mutate → replace the weakest.
//! Higher fitness is better.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod crossover;
mod error;
mod fitness;
mod mutation;
mod population;
mod selection;
mod types;

pub use config::PopulationConfig;
pub use crossover::Crossover;
pub use error::{GaError, Result};
pub use fitness::Fitness;
pub use mutation::Mutation;
pub use population::{GenerationStats, Population};
pub use selection::Selection;
pub use types::{Chromosome, GeneRepresentation, Genes};
