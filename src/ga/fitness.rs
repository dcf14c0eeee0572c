//! Fitness strategies.
//!
//! A [`Fitness`] maps a chromosome's genes to a scalar score. Higher is
//! better. Evaluation is pure: it never touches the chromosome, so the
//! population may score its members on several threads at once.

use super::error::{GaError, Result};
use super::types::Chromosome;

/// Fitness strategy.
///
/// # Examples
///
/// ```
/// use u_genetic::ga::{Chromosome, Fitness, Genes};
///
/// let fitness = Fitness::knapsack(10.0, vec![5.0, 4.0, 3.0], vec![10.0, 40.0, 30.0]).unwrap();
/// let c = Chromosome::new(Genes::Binary(vec![1, 1, 0]));
/// assert_eq!(fitness.evaluate(&c).unwrap(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fitness {
    /// 0/1 knapsack: genes are an item selection mask aligned with
    /// `weights` and `values`. Overweight selections score `0`.
    Knapsack {
        capacity: f64,
        weights: Vec<f64>,
        values: Vec<f64>,
    },
}

impl Fitness {
    /// Builds a knapsack fitness.
    ///
    /// Fails if `weights` and `values` differ in length.
    pub fn knapsack(capacity: f64, weights: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(GaError::InvalidConfig(format!(
                "knapsack has {} weights but {} values",
                weights.len(),
                values.len()
            )));
        }
        Ok(Fitness::Knapsack {
            capacity,
            weights,
            values,
        })
    }

    /// Number of genes this fitness expects, if it constrains it.
    pub fn expected_length(&self) -> Option<usize> {
        match self {
            Fitness::Knapsack { weights, .. } => Some(weights.len()),
        }
    }

    /// Scores a chromosome.
    pub fn evaluate(&self, chromosome: &Chromosome) -> Result<f64> {
        match self {
            Fitness::Knapsack {
                capacity,
                weights,
                values,
            } => knapsack(*capacity, weights, values, chromosome),
        }
    }
}

fn knapsack(capacity: f64, weights: &[f64], values: &[f64], chromosome: &Chromosome) -> Result<f64> {
    let genes = chromosome.genes();
    if genes.len() != weights.len() || genes.len() != values.len() {
        return Err(GaError::GeneLengthMismatch {
            expected: weights.len(),
            actual: genes.len(),
        });
    }

    let (total_weight, total_value) = (0..genes.len())
        .filter(|&i| genes.is_selected(i))
        .fold((0.0, 0.0), |(w, v), i| (w + weights[i], v + values[i]));

    if total_weight > capacity {
        Ok(0.0)
    } else {
        Ok(total_value)
    }
}
