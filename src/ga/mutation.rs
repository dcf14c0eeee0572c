//! Mutation strategies.
//!
//! Mutation perturbs an offspring in place, one gene at a time, to keep
//! diversity in the population.

use super::error::{GaError, Result};
use super::types::{Chromosome, GeneRepresentation};
use rand::Rng;

/// Mutation strategy.
///
/// # Examples
///
/// ```
/// use u_genetic::ga::{GeneRepresentation, Mutation};
///
/// let mutation = Mutation::flip(0.1, GeneRepresentation::Binary).unwrap();
/// assert!(Mutation::flip(1.1, GeneRepresentation::Binary).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Each gene is independently replaced by a fresh random value with
    /// probability `probability`: a random bit for binary genes, a uniform
    /// value in `[0, 1)` for real genes. A redrawn gene may land on its old
    /// value.
    Flip {
        probability: f64,
        representation: GeneRepresentation,
    },
}

impl Mutation {
    pub fn flip(probability: f64, representation: GeneRepresentation) -> Result<Self> {
        check_probability(probability)?;
        Ok(Mutation::Flip {
            probability,
            representation,
        })
    }

    /// Gene representation this mutation is configured for.
    pub fn representation(&self) -> GeneRepresentation {
        match *self {
            Mutation::Flip { representation, .. } => representation,
        }
    }

    /// Mutates `chromosome` in place.
    ///
    /// The stored fitness is left untouched and is stale afterwards.
    pub fn perform_mutation<R: Rng>(&self, chromosome: &mut Chromosome, rng: &mut R) -> Result<()> {
        match *self {
            Mutation::Flip {
                probability,
                representation,
            } => {
                check_probability(probability)?;
                if chromosome.representation() != representation {
                    return Err(GaError::RepresentationMismatch {
                        expected: representation,
                        actual: chromosome.representation(),
                    });
                }

                let genes = chromosome.genes_mut();
                for i in 0..genes.len() {
                    if rng.random::<f64>() < probability {
                        genes.redraw(i, rng);
                    }
                }
                Ok(())
            }
        }
    }
}

fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GaError::InvalidProbability {
            operator: "mutation",
            value: probability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Genes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_probability_zero_never_changes_genes() {
        let mutation = Mutation::flip(0.0, GeneRepresentation::Real).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let original = Chromosome::random(GeneRepresentation::Real, 16, &mut rng);
            let mut mutated = original.clone();
            mutation.perform_mutation(&mut mutated, &mut rng).unwrap();
            assert_eq!(mutated.genes(), original.genes());
        }
    }

    #[test]
    fn test_probability_one_redraws_every_real_gene() {
        // Values outside [0, 1) can only survive if a gene was skipped.
        let mut c = Chromosome::new(Genes::Real(vec![7.0; 32]));
        let mut rng = StdRng::seed_from_u64(42);
        Mutation::flip(1.0, GeneRepresentation::Real)
            .unwrap()
            .perform_mutation(&mut c, &mut rng)
            .unwrap();
        let values = c.genes().as_real().unwrap();
        assert!(values.iter().all(|&v| (0.0..1.0).contains(&v)), "{values:?}");
    }

    #[test]
    fn test_probability_one_redraws_every_binary_gene() {
        let mut c = Chromosome::new(Genes::Binary(vec![2; 32]));
        let mut rng = StdRng::seed_from_u64(42);
        Mutation::flip(1.0, GeneRepresentation::Binary)
            .unwrap()
            .perform_mutation(&mut c, &mut rng)
            .unwrap();
        let bits = c.genes().as_binary().unwrap();
        assert!(bits.iter().all(|&b| b <= 1));
        assert!(bits.contains(&0) && bits.contains(&1));
    }

    #[test]
    fn test_mutation_keeps_length_and_fitness() {
        let mut c = Chromosome::new(Genes::Binary(vec![0; 10]));
        c.set_fitness(3.5);
        let mut rng = StdRng::seed_from_u64(1);
        Mutation::flip(0.5, GeneRepresentation::Binary)
            .unwrap()
            .perform_mutation(&mut c, &mut rng)
            .unwrap();
        assert_eq!(c.len(), 10);
        assert_eq!(c.fitness(), 3.5);
    }

    #[test]
    fn test_representation_mismatch() {
        let mut c = Chromosome::new(Genes::Real(vec![0.5]));
        let mut rng = StdRng::seed_from_u64(42);
        let result = Mutation::flip(0.5, GeneRepresentation::Binary)
            .unwrap()
            .perform_mutation(&mut c, &mut rng);
        assert_eq!(
            result,
            Err(GaError::RepresentationMismatch {
                expected: GeneRepresentation::Binary,
                actual: GeneRepresentation::Real,
            })
        );
    }

    #[test]
    fn test_invalid_probability() {
        assert_eq!(
            Mutation::flip(-0.5, GeneRepresentation::Real),
            Err(GaError::InvalidProbability {
                operator: "mutation",
                value: -0.5
            })
        );
    }
}
