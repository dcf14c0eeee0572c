//! Error type shared by every operator and the population loop.

use super::types::GeneRepresentation;

/// Errors raised by operators, configuration validation and
/// [`Population::evolve`](super::Population::evolve).
///
/// Every error is detected at the point of use and returned to the caller
/// unchanged; nothing is retried or clamped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("unsupported gene representation: {0:?} (expected \"binary\" or \"real\")")]
    UnsupportedRepresentation(String),

    #[error("{operator} probability must be within [0, 1], got {value}")]
    InvalidProbability { operator: &'static str, value: f64 },

    #[error("cannot select {count} chromosomes from a population of {available}")]
    SelectionCountExceedsPopulation { count: usize, available: usize },

    #[error("{offspring} offspring cannot replace members of a population of {population_size}")]
    OffspringExceedPopulation {
        offspring: usize,
        population_size: usize,
    },

    #[error("crossover requires exactly 2 parents, got {0}")]
    ParentCount(usize),

    #[error("parents must have the same length, got {left} and {right}")]
    ParentLengthMismatch { left: usize, right: usize },

    #[error("expected {expected} genes, got {actual}")]
    GeneLengthMismatch { expected: usize, actual: usize },

    #[error("expected {expected} genes, got {actual} genes")]
    RepresentationMismatch {
        expected: GeneRepresentation,
        actual: GeneRepresentation,
    },

    #[error("invalid selection weights: {0}")]
    SelectionWeights(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the GA module.
pub type Result<T> = std::result::Result<T, GaError>;
