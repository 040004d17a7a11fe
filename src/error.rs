//! Configuration and input validation errors.
//!
//! Every error in this crate is detected up front, before the evolutionary
//! loop starts. Once a configuration passes [`validate`], the run itself
//! cannot fail.
//!
//! [`validate`]: crate::EvolveConfig::validate

use thiserror::Error;

/// A configuration rejected during upfront validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The distance matrix has zero locations.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// A row of an explicit distance grid has the wrong width.
    #[error("row {row} of the distance grid has {got} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The configured tour length does not match the matrix dimensions.
    #[error("tour length {locations} does not match matrix size {matrix_size}")]
    LengthMismatch {
        locations: usize,
        matrix_size: usize,
    },

    /// A tour over fewer than two locations has no edge set to evaluate.
    #[error("at least 2 locations are required, got {0}")]
    TooFewLocations(usize),

    /// The population cannot sustain selection pressure.
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// More distinct tours were requested than permutations exist.
    #[error(
        "population size {requested} exceeds the number of distinct tours \
         over {locations} locations"
    )]
    PopulationUnreachable {
        requested: usize,
        locations: usize,
    },

    /// The generation budget is zero.
    #[error("max generations must be at least 1")]
    ZeroGenerations,

    /// Distances must be non-negative.
    #[error("negative distance {value} between locations {from} and {to}")]
    NegativeDistance {
        from: usize,
        to: usize,
        value: f64,
    },

    /// Every inter-location distance is zero, so every tour has total
    /// distance zero and reciprocal fitness is undefined.
    #[error("all inter-location distances are zero")]
    DegenerateMatrix,

    /// The early-termination threshold must be a positive distance.
    #[error("target distance must be positive, got {0}")]
    NonPositiveTarget(f64),
}
