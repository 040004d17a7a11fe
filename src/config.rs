//! Evolution configuration.
//!
//! [`EvolveConfig`] holds every parameter that controls the evolutionary
//! loop, with builder-style setters and fail-fast validation against the
//! distance matrix the run will use.

use crate::crossover::Crossover;
use crate::error::ConfigError;
use crate::matrix::DistanceMatrix;
use crate::selection::Selection;

/// Configuration for an evolutionary TSP run.
///
/// # Examples
///
/// ```
/// use tsp_evo::{Crossover, EvolveConfig, Selection};
///
/// let config = EvolveConfig::new(8)
///     .with_population_size(50)
///     .with_max_generations(2000)
///     .with_selection(Selection::Truncation)
///     .with_crossover(Crossover::Twin)
///     .with_seed(42);
/// assert_eq!(config.population_size, 50);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Tour length: the number of locations every tour visits.
    pub num_locations: usize,

    /// Number of tours the population is reduced to at each selection.
    ///
    /// Crossover expands it back by the strategy's fixed multiple.
    pub population_size: usize,

    /// Generation budget. Without a target distance the loop always runs
    /// exactly this many generations.
    pub max_generations: usize,

    /// Selection strategy.
    pub selection: Selection,

    /// Crossover strategy.
    pub crossover: Crossover,

    /// Mutation modulus: every population index divisible by it has two
    /// tour positions swapped. `0` draws a fresh modulus from `[1, 5]`
    /// each generation.
    pub mutation_denominator: u32,

    /// Early-termination threshold: the run stops as soon as the fittest
    /// tour's total distance is at or below this value.
    ///
    /// `None` disables the convergence test (the default).
    pub target_distance: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl EvolveConfig {
    /// Creates a configuration for the given tour length with defaults.
    pub fn new(num_locations: usize) -> Self {
        Self {
            num_locations,
            population_size: 100,
            max_generations: 500,
            selection: Selection::default(),
            crossover: Crossover::default(),
            mutation_denominator: 0,
            target_distance: None,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation modulus (0 draws a fresh one each generation).
    pub fn with_mutation_denominator(mut self, denominator: u32) -> Self {
        self.mutation_denominator = denominator;
        self
    }

    /// Sets the early-termination distance threshold.
    pub fn with_target_distance(mut self, distance: f64) -> Self {
        self.target_distance = Some(distance);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against the matrix the run will use.
    ///
    /// Every error the engine can produce is detected here, before the
    /// evolutionary loop starts; a validated run cannot fail mid-loop.
    pub fn validate(&self, matrix: &DistanceMatrix) -> Result<(), ConfigError> {
        if matrix.size() == 0 {
            return Err(ConfigError::EmptyMatrix);
        }
        if self.num_locations != matrix.size() {
            return Err(ConfigError::LengthMismatch {
                locations: self.num_locations,
                matrix_size: matrix.size(),
            });
        }
        if self.num_locations < 2 {
            return Err(ConfigError::TooFewLocations(self.num_locations));
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if let Some(permutations) = permutation_count(self.num_locations) {
            if self.population_size as u128 > permutations {
                return Err(ConfigError::PopulationUnreachable {
                    requested: self.population_size,
                    locations: self.num_locations,
                });
            }
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if let Some((from, to, value)) = matrix.first_negative() {
            return Err(ConfigError::NegativeDistance { from, to, value });
        }
        if matrix.is_degenerate() {
            return Err(ConfigError::DegenerateMatrix);
        }
        if let Some(target) = self.target_distance {
            if target <= 0.0 {
                return Err(ConfigError::NonPositiveTarget(target));
            }
        }
        Ok(())
    }
}

/// Number of distinct tours over `n` locations: `n!`.
///
/// `None` on overflow, which for feasibility checks means "more than any
/// population could ask for".
fn permutation_count(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}
