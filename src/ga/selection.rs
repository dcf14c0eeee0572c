//! Selection strategies for the GA.
//!
//! Selection draws the mating pool that crossover consumes. Every strategy
//! picks **distinct** members of the population: the pool never holds the
//! same individual twice, even when several individuals share identical
//! genes.
//!
//! All strategies assume **maximization** (higher fitness = better).
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::error::{GaError, Result};
use super::types::Chromosome;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Selection strategy for building the mating pool.
///
/// # Examples
///
/// ```
/// use u_genetic::ga::Selection;
///
/// // Pick 10 parents, fitness-proportionate
/// let sel = Selection::roulette_wheel(10);
///
/// // Pick 10 parents, each the winner of a 3-way tournament
/// let sel = Selection::tournament(10, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate selection without replacement.
    ///
    /// Fitness values are shifted so the weakest individual weighs `1`:
    /// `w_i = f_i - min(f) + 1`. Zero and negative fitness stay selectable.
    ///
    /// # Complexity
    /// O(n + count log n) per call
    RouletteWheel { count: usize },

    /// Repeated tournaments over the not-yet-selected individuals.
    ///
    /// Each round samples `size` contestants (with replacement) from the
    /// remaining candidates and keeps the fittest. Higher `size` means
    /// stronger selection pressure.
    ///
    /// # Complexity
    /// O(count · (size + n))
    Tournament { count: usize, size: usize },
}

impl Selection {
    /// Roulette-wheel selection of `count` parents.
    pub fn roulette_wheel(count: usize) -> Self {
        Selection::RouletteWheel { count }
    }

    /// Tournament selection of `count` parents with `size`-way tournaments.
    pub fn tournament(count: usize, size: usize) -> Self {
        Selection::Tournament { count, size }
    }

    /// Size of the mating pool this strategy produces.
    pub fn count(&self) -> usize {
        match *self {
            Selection::RouletteWheel { count } | Selection::Tournament { count, .. } => count,
        }
    }

    /// Picks distinct positions in `chromosomes`, in selection order.
    ///
    /// Fails if more parents are requested than there are chromosomes.
    pub fn select_indices<R: Rng>(
        &self,
        chromosomes: &[Chromosome],
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        let count = self.count();
        if count > chromosomes.len() {
            return Err(GaError::SelectionCountExceedsPopulation {
                count,
                available: chromosomes.len(),
            });
        }

        match *self {
            Selection::RouletteWheel { count } => roulette_wheel(chromosomes, count, rng),
            Selection::Tournament { count, size } => Ok(tournament(chromosomes, count, size, rng)),
        }
    }

    /// Returns copies of the selected chromosomes.
    pub fn select<R: Rng>(&self, chromosomes: &[Chromosome], rng: &mut R) -> Result<Vec<Chromosome>> {
        Ok(self
            .select_indices(chromosomes, rng)?
            .into_iter()
            .map(|i| chromosomes[i].clone())
            .collect())
    }
}

/// Weighted sampling without replacement over shifted fitness values.
fn roulette_wheel<R: Rng>(chromosomes: &[Chromosome], count: usize, rng: &mut R) -> Result<Vec<usize>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let min_fitness = chromosomes
        .iter()
        .map(Chromosome::fitness)
        .fold(f64::INFINITY, f64::min);

    let weights: Vec<f64> = chromosomes
        .iter()
        .map(|c| c.fitness() - min_fitness + 1.0)
        .collect();

    let positions: Vec<usize> = (0..chromosomes.len()).collect();
    let chosen = positions
        .choose_multiple_weighted(rng, count, |&i| weights[i])
        .map_err(|e| GaError::SelectionWeights(e.to_string()))?;

    Ok(chosen.copied().collect())
}

/// Distinct tournament winners.
fn tournament<R: Rng>(chromosomes: &[Chromosome], count: usize, size: usize, rng: &mut R) -> Vec<usize> {
    let size = size.max(1);
    let mut remaining: Vec<usize> = (0..chromosomes.len()).collect();
    let mut selected = Vec::with_capacity(count);

    for _ in 0..count {
        let mut best = rng.random_range(0..remaining.len());
        for _ in 1..size {
            let slot = rng.random_range(0..remaining.len());
            if chromosomes[remaining[slot]].fitness() > chromosomes[remaining[best]].fitness() {
                best = slot;
            }
        }
        selected.push(remaining.swap_remove(best));
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Genes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn make_population(fitnesses: &[f64]) -> Vec<Chromosome> {
        fitnesses
            .iter()
            .map(|&f| {
                let mut c = Chromosome::new(Genes::Binary(vec![0, 1]));
                c.set_fitness(f);
                c
            })
            .collect()
    }

    #[test]
    fn test_roulette_returns_distinct_indices() {
        let pop = make_population(&[5.0; 20]);
        let mut rng = StdRng::seed_from_u64(42);

        for count in 0..=20 {
            let picked = Selection::roulette_wheel(count)
                .select_indices(&pop, &mut rng)
                .unwrap();
            assert_eq!(picked.len(), count);
            let unique: HashSet<usize> = picked.iter().copied().collect();
            assert_eq!(unique.len(), count, "duplicate pick in {picked:?}");
        }
    }

    #[test]
    fn test_roulette_count_exceeds_population() {
        let pop = make_population(&[1.0, 2.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            Selection::roulette_wheel(4).select_indices(&pop, &mut rng),
            Err(GaError::SelectionCountExceedsPopulation {
                count: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(&[1.0, 100.0, 50.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::roulette_wheel(1).select_indices(&pop, &mut rng).unwrap()[0];
            counts[idx] += 1;
        }
        assert!(
            counts[1] > counts[0] && counts[1] > counts[3],
            "best should be selected most often: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_keeps_weakest_selectable() {
        // Shifted weights: [1, 2]; the weakest still gets ~1/3 of the picks.
        let pop = make_population(&[-7.0, -6.0]);
        let mut rng = StdRng::seed_from_u64(3);

        let mut weakest = 0u32;
        for _ in 0..3000 {
            if Selection::roulette_wheel(1).select_indices(&pop, &mut rng).unwrap()[0] == 0 {
                weakest += 1;
            }
        }
        assert!((700..1300).contains(&weakest), "weakest picked {weakest} times");
    }

    #[test]
    fn test_roulette_equal_fitness_is_uniform() {
        let pop = make_population(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = Selection::roulette_wheel(1).select_indices(&pop, &mut rng).unwrap()[0];
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_rejects_nan_fitness() {
        let pop = make_population(&[1.0, f64::NAN]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            Selection::roulette_wheel(1).select_indices(&pop, &mut rng),
            Err(GaError::SelectionWeights(_))
        ));
    }

    #[test]
    fn test_select_does_not_mutate_input() {
        let pop = make_population(&[3.0, 1.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let pool = Selection::roulette_wheel(2).select(&pop, &mut rng).unwrap();
        assert_eq!(pool.len(), 2);
        let fitnesses: Vec<f64> = pop.iter().map(Chromosome::fitness).collect();
        assert_eq!(fitnesses, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_tournament_returns_distinct_indices() {
        let pop = make_population(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut rng = StdRng::seed_from_u64(42);
        let picked = Selection::tournament(6, 3).select_indices(&pop, &mut rng).unwrap();
        let unique: HashSet<usize> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let idx = Selection::tournament(1, 4).select_indices(&pop, &mut rng).unwrap()[0];
            counts[idx] += 1;
        }
        assert!(
            counts[0] > 6000,
            "expected best to be selected >60% of the time, got {}/{n}",
            counts[0]
        );
    }

    #[test]
    fn test_tournament_count_exceeds_population() {
        let pop = make_population(&[1.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert!(Selection::tournament(2, 2).select(&pop, &mut rng).is_err());
    }
}
