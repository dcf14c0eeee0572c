//! Gene and chromosome types.
//!
//! A chromosome's genes are homogeneous by construction: [`Genes`] is either
//! a binary vector or a real-valued vector, never a mix. The owning
//! population fixes the [`GeneRepresentation`] at construction time.

use super::error::{GaError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How genes are encoded within a population.
///
/// # Examples
///
/// ```
/// use u_genetic::ga::GeneRepresentation;
///
/// let repr: GeneRepresentation = "binary".parse().unwrap();
/// assert_eq!(repr, GeneRepresentation::Binary);
/// assert!("ternary".parse::<GeneRepresentation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneRepresentation {
    /// Every gene is `0` or `1`.
    Binary,
    /// Every gene is a real value in `[0, 1)`.
    Real,
}

impl fmt::Display for GeneRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneRepresentation::Binary => f.write_str("binary"),
            GeneRepresentation::Real => f.write_str("real"),
        }
    }
}

impl FromStr for GeneRepresentation {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "binary" => Ok(GeneRepresentation::Binary),
            "real" | "floating_point" => Ok(GeneRepresentation::Real),
            other => Err(GaError::UnsupportedRepresentation(other.to_string())),
        }
    }
}

/// A homogeneous gene sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Genes {
    Binary(Vec<u8>),
    Real(Vec<f64>),
}

impl Genes {
    /// Generates `length` random genes of the given representation.
    pub fn random<R: Rng>(
        representation: GeneRepresentation,
        length: usize,
        rng: &mut R,
    ) -> Self {
        match representation {
            GeneRepresentation::Binary => {
                Genes::Binary((0..length).map(|_| rng.random_range(0..=1)).collect())
            }
            GeneRepresentation::Real => {
                Genes::Real((0..length).map(|_| rng.random_range(0.0..1.0)).collect())
            }
        }
    }

    pub fn representation(&self) -> GeneRepresentation {
        match self {
            Genes::Binary(_) => GeneRepresentation::Binary,
            Genes::Real(_) => GeneRepresentation::Real,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Genes::Binary(g) => g.len(),
            Genes::Real(g) => g.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Genes::Binary(g) => Some(g),
            Genes::Real(_) => None,
        }
    }

    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            Genes::Real(g) => Some(g),
            Genes::Binary(_) => None,
        }
    }

    /// Checks that every gene lies in its representation's range: `{0, 1}`
    /// for binary, `[0, 1)` for real.
    pub fn validate(&self) -> Result<()> {
        let out_of_range = match self {
            Genes::Binary(g) => g
                .iter()
                .position(|&b| b > 1)
                .map(|i| (i, g[i].to_string())),
            Genes::Real(g) => g
                .iter()
                .position(|v| !(0.0..1.0).contains(v))
                .map(|i| (i, g[i].to_string())),
        };
        match out_of_range {
            Some((index, value)) => Err(GaError::InvalidConfig(format!(
                "{} gene {index} is out of range: {value}",
                self.representation()
            ))),
            None => Ok(()),
        }
    }

    /// Overwrites the gene at `index` with a fresh random draw.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn redraw<R: Rng>(&mut self, index: usize, rng: &mut R) {
        match self {
            Genes::Binary(g) => g[index] = rng.random_range(0..=1),
            Genes::Real(g) => g[index] = rng.random_range(0.0..1.0),
        }
    }

    /// Whether the gene at `index` marks its item as selected.
    ///
    /// Binary genes select on `1`; real genes are decoded as random keys and
    /// select on values `>= 0.5`.
    pub(crate) fn is_selected(&self, index: usize) -> bool {
        match self {
            Genes::Binary(g) => g[index] == 1,
            Genes::Real(g) => g[index] >= 0.5,
        }
    }

    /// Builds the two complementary children obtained by cutting both
    /// sequences at `point`.
    pub(crate) fn splice(&self, other: &Genes, point: usize) -> Result<(Genes, Genes)> {
        match (self, other) {
            (Genes::Binary(a), Genes::Binary(b)) => {
                let (c1, c2) = splice_at(a, b, point);
                Ok((Genes::Binary(c1), Genes::Binary(c2)))
            }
            (Genes::Real(a), Genes::Real(b)) => {
                let (c1, c2) = splice_at(a, b, point);
                Ok((Genes::Real(c1), Genes::Real(c2)))
            }
            _ => Err(GaError::RepresentationMismatch {
                expected: self.representation(),
                actual: other.representation(),
            }),
        }
    }

    /// Builds two children by swapping each position between the parents
    /// independently with probability 0.5.
    pub(crate) fn uniform_mix<R: Rng>(
        &self,
        other: &Genes,
        rng: &mut R,
    ) -> Result<(Genes, Genes)> {
        match (self, other) {
            (Genes::Binary(a), Genes::Binary(b)) => {
                let (c1, c2) = mix(a, b, rng);
                Ok((Genes::Binary(c1), Genes::Binary(c2)))
            }
            (Genes::Real(a), Genes::Real(b)) => {
                let (c1, c2) = mix(a, b, rng);
                Ok((Genes::Real(c1), Genes::Real(c2)))
            }
            _ => Err(GaError::RepresentationMismatch {
                expected: self.representation(),
                actual: other.representation(),
            }),
        }
    }
}

fn splice_at<T: Copy>(a: &[T], b: &[T], point: usize) -> (Vec<T>, Vec<T>) {
    let mut c1 = Vec::with_capacity(a.len());
    c1.extend_from_slice(&a[..point]);
    c1.extend_from_slice(&b[point..]);

    let mut c2 = Vec::with_capacity(b.len());
    c2.extend_from_slice(&b[..point]);
    c2.extend_from_slice(&a[point..]);

    (c1, c2)
}

fn mix<T: Copy, R: Rng>(a: &[T], b: &[T], rng: &mut R) -> (Vec<T>, Vec<T>) {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| if rng.random_bool(0.5) { (y, x) } else { (x, y) })
        .unzip()
}

impl fmt::Display for Genes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Genes::Binary(g) => write!(f, "{g:?}"),
            Genes::Real(g) => write!(f, "{g:?}"),
        }
    }
}

/// One candidate solution: a gene sequence and its last computed fitness.
///
/// Higher fitness is better. The stored fitness is whatever the last
/// evaluation produced; it goes stale as soon as the genes change.
///
/// Two individuals with the same genes and fitness are still distinct
/// members of a population, which addresses them by position. There is no
/// `PartialEq` for that reason.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Genes,
    fitness: f64,
}

impl Chromosome {
    /// Creates a chromosome with fitness `0.0`.
    pub fn new(genes: Genes) -> Self {
        Self { genes, fitness: 0.0 }
    }

    /// Same as [`Chromosome::new`].
    pub fn from_genes(genes: Genes) -> Self {
        Self::new(genes)
    }

    /// Creates a chromosome of `length` random genes.
    pub fn random<R: Rng>(
        representation: GeneRepresentation,
        length: usize,
        rng: &mut R,
    ) -> Self {
        Self::new(Genes::random(representation, length, rng))
    }

    pub fn genes(&self) -> &Genes {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut Genes {
        &mut self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn representation(&self) -> GeneRepresentation {
        self.genes.representation()
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genes: {}, Fitness: {}", self.genes, self.fitness)
    }
}
