//! Crossover strategies.
//!
//! A crossover takes exactly two parents of equal length and returns exactly
//! two offspring. Whether the parents recombine at all is decided by a
//! continuous uniform draw against the configured probability; parents that
//! do not recombine are copied through unchanged, keeping their fitness.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//!   (single-point crossover)
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use super::error::{GaError, Result};
use super::types::Chromosome;
use rand::Rng;

/// Crossover strategy.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_genetic::ga::{Chromosome, Crossover, Genes};
///
/// let crossover = Crossover::single_point(1.0).unwrap();
/// let parents = [
///     Chromosome::new(Genes::Binary(vec![1, 1, 1, 1])),
///     Chromosome::new(Genes::Binary(vec![0, 0, 0, 0])),
/// ];
/// let mut rng = StdRng::seed_from_u64(42);
/// let offspring = crossover.cross_over(&parents, &mut rng).unwrap();
/// assert_eq!(offspring.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Cut both parents at one point drawn uniformly from `[1, len - 1]`
    /// and swap the tails.
    SinglePoint { probability: f64 },

    /// Swap every gene position between the parents with probability 0.5.
    Uniform { probability: f64 },
}

impl Crossover {
    /// Single-point crossover applied with the given probability.
    pub fn single_point(probability: f64) -> Result<Self> {
        check_probability(probability)?;
        Ok(Crossover::SinglePoint { probability })
    }

    /// Uniform crossover applied with the given probability.
    pub fn uniform(probability: f64) -> Result<Self> {
        check_probability(probability)?;
        Ok(Crossover::Uniform { probability })
    }

    /// Probability that a pair of parents recombines.
    pub fn probability(&self) -> f64 {
        match *self {
            Crossover::SinglePoint { probability } | Crossover::Uniform { probability } => {
                probability
            }
        }
    }

    /// Produces two offspring from exactly two parents.
    pub fn cross_over<R: Rng>(&self, parents: &[Chromosome], rng: &mut R) -> Result<Vec<Chromosome>> {
        let [first, second] = parents else {
            return Err(GaError::ParentCount(parents.len()));
        };
        if first.len() != second.len() {
            return Err(GaError::ParentLengthMismatch {
                left: first.len(),
                right: second.len(),
            });
        }
        if first.representation() != second.representation() {
            return Err(GaError::RepresentationMismatch {
                expected: first.representation(),
                actual: second.representation(),
            });
        }
        let probability = self.probability();
        check_probability(probability)?;

        if !rng.random_bool(probability) {
            return Ok(vec![first.clone(), second.clone()]);
        }

        let (genes1, genes2) = match self {
            Crossover::SinglePoint { .. } => {
                // A single gene has no interior cut point.
                if first.len() < 2 {
                    return Ok(vec![first.clone(), second.clone()]);
                }
                let point = rng.random_range(1..first.len());
                first.genes().splice(second.genes(), point)?
            }
            Crossover::Uniform { .. } => first.genes().uniform_mix(second.genes(), rng)?,
        };

        Ok(vec![Chromosome::new(genes1), Chromosome::new(genes2)])
    }
}

fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GaError::InvalidProbability {
            operator: "crossover",
            value: probability,
        })
    }
}
