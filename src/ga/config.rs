//! Population configuration.
//!
//! [`PopulationConfig`] holds the parameters fixed when a population is
//! created: gene representation, size, chromosome length, and how the run's
//! randomness and evaluation are set up.

use super::error::{GaError, Result};
use super::types::GeneRepresentation;

/// Configuration for a [`Population`](super::Population).
///
/// # Builder Pattern
///
/// ```
/// use u_genetic::ga::{GeneRepresentation, PopulationConfig};
///
/// let config = PopulationConfig::new(GeneRepresentation::Binary, 50, 3)
///     .with_seed(42)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    /// Encoding shared by every chromosome of the population.
    pub representation: GeneRepresentation,

    /// Number of chromosomes. Constant across generations.
    pub population_size: usize,

    /// Number of genes per chromosome.
    pub chromosome_length: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl PopulationConfig {
    pub fn new(
        representation: GeneRepresentation,
        population_size: usize,
        chromosome_length: usize,
    ) -> Self {
        Self {
            representation,
            population_size,
            chromosome_length,
            seed: None,
            parallel: true,
        }
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.chromosome_length == 0 {
            return Err(GaError::InvalidConfig(
                "chromosome_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
